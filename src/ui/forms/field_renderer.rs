//! Field rendering utilities for forms

use crate::state::{DraftField, FieldKind, VolunteerDraft};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

fn accent(error: Option<&str>, is_active: bool) -> Color {
    match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

/// Spans showing the field's value, with a cursor on the active text field
fn value_spans(draft: &VolunteerDraft, field: DraftField, is_active: bool) -> Vec<Span<'static>> {
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let display_value = draft.display_value(field);

    match field.kind() {
        FieldKind::Text | FieldKind::Secret => {
            let mut spans = if display_value.is_empty() && !is_active {
                vec![Span::styled("(empty)", Style::default().fg(Color::DarkGray))]
            } else {
                vec![Span::styled(display_value, value_style)]
            };
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            spans
        }
        FieldKind::Choice => {
            let arrow_style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::styled("◀ ", arrow_style),
                Span::styled(display_value, value_style),
                Span::styled(" ▶", arrow_style),
            ]
        }
        FieldKind::Toggle => vec![
            Span::styled(display_value, value_style.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", field.label()), value_style),
        ],
    }
}

/// Draw one draft field with its validation error on the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    draft: &VolunteerDraft,
    field: DraftField,
    error: Option<&str>,
    is_active: bool,
) {
    // Toggles carry their label next to the checkbox
    let title = match field.kind() {
        FieldKind::Toggle => String::new(),
        _ => format!(" {} ", field.label()),
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(error, is_active)));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    let line = Line::from(value_spans(draft, field, is_active));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw one draft field on a single row: label, value, then the error
pub fn draw_field_compact(
    frame: &mut Frame,
    area: Rect,
    draft: &VolunteerDraft,
    field: DraftField,
    error: Option<&str>,
    is_active: bool,
) {
    let marker = if is_active { "▸ " } else { "  " };
    let mut spans = vec![Span::styled(marker, Style::default().fg(accent(error, is_active)))];
    if field.kind() != FieldKind::Toggle {
        spans.push(Span::styled(
            format!("{}: ", field.label()),
            Style::default().fg(accent(error, is_active)),
        ));
    }
    spans.extend(value_spans(draft, field, is_active));
    if let Some(message) = error {
        spans.push(Span::styled(format!("  {message}"), Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
