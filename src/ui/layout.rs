//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Step, WizardPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Text of the step indicator, e.g. "Step 2 of 5 · Contact Details"
pub fn step_indicator(step: Step) -> String {
    format!("Step {} of {} · {}", step.number(), Step::COUNT, step.title())
}

/// Draw the header with the step indicator and progress markers
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.wizard.is_submitted() {
        spans.push(Span::styled(
            "Registration complete",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        let current = app.wizard.step();
        spans.push(Span::styled(
            step_indicator(current),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
        for step in Step::ALL {
            let (marker, color) = match step.number().cmp(&current.number()) {
                std::cmp::Ordering::Less => ("●", Color::Green),
                std::cmp::Ordering::Equal => ("●", Color::Cyan),
                std::cmp::Ordering::Greater => ("○", Color::DarkGray),
            };
            spans.push(Span::styled(format!("{marker} "), Style::default().fg(color)));
        }
    }

    let block = Block::default()
        .title(" VVHS Volunteer Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Backend status
    let backend = match app.state.backend_online {
        Some(true) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        Some(false) => Span::styled(" ○ offline ", Style::default().fg(Color::Red)),
        None => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(backend);

    spans.push(Span::styled(get_hints(app), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current screen
fn get_hints(app: &App) -> String {
    if app.state.current_error().is_some() {
        return "Enter/Esc:dismiss".to_string();
    }
    match app.wizard.phase() {
        WizardPhase::Submitted { .. } => "n:new registration  q:quit".to_string(),
        WizardPhase::Submitting => "Submitting registration…".to_string(),
        WizardPhase::Editing if app.wizard.step().is_last() => format!(
            "Tab:next  ←/→:level  Space:toggle  {SUBMIT_SHORTCUT}:submit  {BACK_SHORTCUT}:back"
        ),
        WizardPhase::Editing => format!(
            "Tab:next  {NEXT_SHORTCUT}:continue  {BACK_SHORTCUT}:back  {PASTE_SHORTCUT}:paste"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_indicator() {
        assert_eq!(
            step_indicator(Step::Personal),
            format!("Step 1 of 5 · {}", Step::Personal.title())
        );
        assert_eq!(
            step_indicator(Step::Contact),
            "Step 2 of 5 · Contact Details"
        );
        assert!(step_indicator(Step::Review).starts_with("Step 5 of 5"));
    }
}
