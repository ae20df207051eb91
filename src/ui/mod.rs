mod dashboard;
mod form;
mod help;
mod helpers;
mod theme;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView};
use crate::db::KeyValueStore;
use helpers::centered_rect;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Daytimer  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "Timer Dashboard",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}", Local::now().format("%A, %B %e, %Y")),
            Style::default().fg(Theme::dim()),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(rounded_block());
    frame.render_widget(header, layout[0]);

    let title = match app.view() {
        AppView::Form => " Target ",
        AppView::Dashboard => " Dashboard ",
        AppView::Help => " Help ",
    };
    let body_block = rounded_block().title(title);
    let body_area = body_block.inner(layout[1]);
    frame.render_widget(body_block, layout[1]);
    render_body(frame, body_area, app);

    let footer = Paragraph::new(footer_line(app))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);

    if let Some(message) = &app.alert {
        render_alert(frame, message);
    }
}

fn render_body<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(area);
    let content = Rect {
        y: sections[0].y.saturating_add(1),
        height: sections[0].height.saturating_sub(1),
        ..sections[0]
    };

    match app.view() {
        AppView::Form => frame.render_widget(
            Paragraph::new(form::build_form_text(&app.form)).style(Style::default().fg(Theme::text())),
            content,
        ),
        AppView::Dashboard => dashboard::render_dashboard(frame, content, app),
        AppView::Help => frame.render_widget(Paragraph::new(help::build_help_text()), content),
    }

    frame.render_widget(Paragraph::new(Text::from(keybinds_lines(app))), sections[1]);
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn footer_line<S: KeyValueStore>(app: &App<S>) -> Line<'_> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Theme::paused()),
        ));
    }
    let session = &app.session;
    if app.ticking() {
        let animation_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        let indicator = animation_chars[(session.elapsed() % animation_chars.len() as u64) as usize];
        Line::from(Span::styled(
            format!("{indicator} Running"),
            Style::default()
                .fg(Theme::running())
                .add_modifier(Modifier::BOLD),
        ))
    } else if session.target() > 0 && session.remaining() == 0 {
        Line::from(Span::styled(
            "● Target reached",
            Style::default().fg(Theme::done()),
        ))
    } else if session.is_running() {
        Line::from(Span::styled(
            "● Running (nothing left to count)",
            Style::default().fg(Theme::dim()),
        ))
    } else {
        Line::from(Span::styled("● Paused", Style::default().fg(Theme::dim())))
    }
}

fn keybinds_lines<S: KeyValueStore>(app: &App<S>) -> Vec<Line<'static>> {
    let hint = match app.view() {
        AppView::Form => "0-9: Type  Tab/Up/Down: Field  Enter: Set  esc: Keep target  ?: Help  q: Quit",
        AppView::Dashboard => "space: Start/Pause  e: Edit target  ?: Help  q: Quit",
        AppView::Help => "Press ? or ESC to close this help screen",
    };
    vec![
        Line::from(Span::styled(
            "----------------------------------------",
            Style::default().fg(Theme::dim()),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Theme::dim()))),
    ]
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Theme::done())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Theme::dim())),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to continue", Style::default().fg(Theme::dim())),
        ]),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(rounded_block().title(" Daytimer "));
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::AppEvent;
    use crate::clock::{MidnightReset, Moment};
    use crate::db::MemoryStore;
    use crate::session::{KEY_ELAPSED, KEY_TARGET, Session};

    fn app_with(entries: &[(&str, &str)]) -> App<MemoryStore> {
        let now = Moment::now();
        let session = Session::load(MemoryStore::with(entries)).unwrap();
        App::with_clock(session, now, MidnightReset::arm(&now.wall))
    }

    fn render(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn dashboard_shows_three_readouts() {
        let app = app_with(&[(KEY_ELAPSED, "61"), (KEY_TARGET, "3661")]);
        let screen = render(&app);
        assert!(screen.contains("Target Time"));
        assert!(screen.contains("01:01:01"));
        assert!(screen.contains("00:01:01"));
        assert!(screen.contains("01:00:00"));
        assert!(screen.contains("Start"));
    }

    #[test]
    fn first_run_shows_form() {
        let screen = render(&app_with(&[]));
        assert!(screen.contains("Set a target time"));
        assert!(screen.contains("Hours"));
        assert!(screen.contains("Seconds"));
    }

    #[test]
    fn alert_popup_is_drawn() {
        let mut app = app_with(&[(KEY_TARGET, "60")]);
        app.alert = Some(crate::app::TARGET_REACHED.to_string());
        assert!(render(&app).contains("Target time reached!"));
    }

    #[test]
    fn readouts_follow_session() {
        let mut app = app_with(&[(KEY_ELAPSED, "30"), (KEY_TARGET, "20")]);
        let [target, current, remaining] = dashboard::readouts(&app);
        assert_eq!(target.1, "00:00:20");
        assert_eq!(current.1, "00:00:30");
        assert_eq!(remaining.1, "00:00:00");

        app.update(AppEvent::KeyPress(KeyCode::Char('?')));
        assert!(render(&app).contains("Key bindings"));
    }
}
