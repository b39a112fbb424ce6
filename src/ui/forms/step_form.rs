//! Rendering of the current wizard step

use super::field_renderer::{draw_field, draw_field_compact, FIELD_HEIGHT};
use super::review::draw_summary;
use crate::app::App;
use crate::state::{FormButton, Step};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows kept for the review summary
const SUMMARY_MIN_HEIGHT: u16 = 6;

/// Draw the fields and buttons of the current step
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.wizard.step();
    let fields = step.fields();
    let submit_error = app.wizard.submit_error().filter(|_| step.is_last());

    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if submit_error.is_some() { 3 } else { 0 };
    let summary_height = if step.is_last() { SUMMARY_MIN_HEIGHT } else { 0 };
    let compact =
        needs_compact_fields(fields.len(), banner_height + summary_height, inner.height);
    let field_height = if compact { 1 } else { FIELD_HEIGHT };

    let mut constraints = Vec::with_capacity(fields.len() + 4);
    if submit_error.is_some() {
        constraints.push(Constraint::Length(banner_height));
    }
    if step.is_last() {
        constraints.push(Constraint::Min(summary_height));
    }
    constraints.extend(fields.iter().map(|_| Constraint::Length(field_height)));
    if !step.is_last() {
        constraints.push(Constraint::Min(0));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);
    let mut next = 0;

    if let Some(message) = submit_error {
        let banner = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Registration failed ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(banner, chunks[next]);
        next += 1;
    }

    if step.is_last() {
        draw_summary(frame, chunks[next], app.wizard.draft());
        next += 1;
    }

    let active = app.state.active_field(step);
    for field in fields {
        let draft = app.wizard.draft();
        let error = app.wizard.error_for(*field);
        let is_active = active == Some(*field);
        if compact {
            draw_field_compact(frame, chunks[next], draft, *field, error, is_active);
        } else {
            draw_field(frame, chunks[next], draft, *field, error, is_active);
        }
        next += 1;
    }

    if let Some(buttons_area) = chunks.last() {
        draw_buttons(frame, *buttons_area, app, step);
    }
}

/// Whether boxed fields would push the buttons row off a step area of `height` rows
fn needs_compact_fields(field_count: usize, extra_rows: u16, height: u16) -> bool {
    let boxed = field_count as u16 * FIELD_HEIGHT + extra_rows + BUTTON_HEIGHT;
    boxed > height
}

/// Draw the Back and Next/Submit buttons
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, step: Step) {
    let row_active = app.state.is_buttons_row_active(step);
    let selected = app.state.form_selected_button;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Back
            Constraint::Min(0),
            Constraint::Length(16), // Next / Submit
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Back",
        row_active && selected == FormButton::Back,
        !step.is_first(),
    );

    let forward_label = match (step.is_last(), app.wizard.is_submitting()) {
        (false, _) => "Next",
        (true, false) => "Submit",
        (true, true) => "Submitting…",
    };
    render_button(
        frame,
        chunks[2],
        forward_label,
        row_active && selected == FormButton::Forward,
        !app.wizard.is_submitting(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_fields_only_when_boxes_do_not_fit() {
        // Contact step inside an 80x24 terminal
        assert!(needs_compact_fields(7, 0, 18));
        assert!(!needs_compact_fields(5, 0, 18));
        assert!(!needs_compact_fields(7, 0, 40));
        // Review step with banner and summary
        assert!(!needs_compact_fields(2, 9, 18));
        assert!(needs_compact_fields(2, 9, 17));
    }
}
