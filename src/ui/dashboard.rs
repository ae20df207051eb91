use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::Theme;
use crate::app::App;
use crate::db::KeyValueStore;
use crate::format::format_time;

/// Label and formatted value of the three readouts, left to right.
pub fn readouts<S: KeyValueStore>(app: &App<S>) -> [(&'static str, String); 3] {
    let session = &app.session;
    [
        ("Target Time", format_time(session.target())),
        ("Current Time", format_time(session.elapsed())),
        ("Remaining Time", format_time(session.remaining())),
    ]
}

pub fn render_dashboard<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let remaining = app.session.remaining();
    for (index, (label, value)) in readouts(app).into_iter().enumerate() {
        let value_color = if index == 2 && remaining == 0 {
            Theme::done()
        } else {
            Theme::text()
        };
        let readout = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(value_color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::dim()))
                .title(Span::styled(
                    format!(" {label} "),
                    Style::default().fg(Theme::accent()),
                )),
        );
        frame.render_widget(readout, columns[index]);
    }

    frame.render_widget(
        Paragraph::new(controls_line(app)).alignment(Alignment::Center),
        rows[2],
    );
}

fn controls_line<S: KeyValueStore>(app: &App<S>) -> Line<'static> {
    let running = app.session.is_running();
    let (toggle, toggle_color) = if running {
        ("[ space: Pause ]", Theme::done())
    } else {
        ("[ space: Start ]", Theme::running())
    };
    let edit_style = if running {
        Style::default().fg(Theme::dim())
    } else {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(
            toggle,
            Style::default()
                .fg(toggle_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[ e: Edit Target ]", edit_style),
    ])
}
