use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::{FormField, TargetForm};

pub fn build_form_text(form: &TargetForm) -> Text<'_> {
    let mut lines = vec![
        Line::from(Span::styled(
            "  Set a target time",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for field in FormField::ALL {
        let focused = form.field == field;
        let marker_style = if focused {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let value = form.value(field);
        let value_span = if value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Theme::dim()))
        } else {
            Span::styled(
                value,
                Style::default()
                    .fg(Theme::text())
                    .add_modifier(Modifier::BOLD),
            )
        };
        let mut spans = vec![
            Span::styled(if focused { "  > " } else { "    " }, marker_style),
            Span::styled(format!("{:<9}", field.label()), marker_style),
            value_span,
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Theme::highlight())));
        }
        spans.push(Span::styled(
            format!("  ({})", field.hint()),
            Style::default().fg(Theme::dim()),
        ));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter: Set Target Time",
        Style::default()
            .fg(Theme::primary())
            .add_modifier(Modifier::BOLD),
    )));
    Text::from(lines)
}
