use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{key_line, section_title};
use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.push(key_line("q", "Quit"));
    lines.push(key_line("?", "Toggle help"));

    lines.push(Line::from(""));
    lines.push(section_title("Dashboard"));
    lines.push(key_line("space", "Start / pause the timer"));
    lines.push(key_line("e", "Edit target (only while paused)"));

    lines.push(Line::from(""));
    lines.push(section_title("Target form"));
    lines.push(key_line("0-9", "Type into the focused field"));
    lines.push(key_line("Tab/Down", "Next field"));
    lines.push(key_line("Up", "Previous field"));
    lines.push(key_line("Backspace", "Delete last digit"));
    lines.push(key_line("Enter", "Set target time (empty fields count as 0)"));
    lines.push(key_line("esc", "Keep the current target"));

    lines.push(Line::from(""));
    lines.push(section_title("Notes"));
    lines.push(Line::from(Span::styled(
        "  - Elapsed time resets to zero at local midnight.",
        Style::default().fg(Theme::text()),
    )));
    lines.push(Line::from(Span::styled(
        "  - The session is saved after every change and restored on start.",
        Style::default().fg(Theme::text()),
    )));

    Text::from(lines)
}
