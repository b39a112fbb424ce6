//! Summary of the whole draft shown on the review step

use crate::state::{Step, VolunteerDraft};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the summary lines, one section per data entry step
pub fn summary_lines(draft: &VolunteerDraft) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for step in Step::ALL.iter().filter(|s| !s.is_last()) {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for field in step.fields().iter().filter(|f| !f.is_write_only()) {
            let value = draft.display_value(*field);
            let value = if value.trim().is_empty() {
                Span::styled("(none)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", field.label()),
                    Style::default().fg(Color::Gray),
                ),
                value,
            ]));
        }
    }
    lines
}

pub fn draw_summary(frame: &mut Frame, area: Rect, draft: &VolunteerDraft) {
    let block = Block::default()
        .title(" Review your details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let summary = Paragraph::new(summary_lines(draft))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(summary, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_summary_masks_password_and_skips_confirmation() {
        let draft = VolunteerDraft {
            first_name: "Jane".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            ..Default::default()
        };
        let text = plain(&summary_lines(&draft));

        assert!(text.contains(&"  First Name: Jane".to_string()));
        assert!(text.contains(&"  Password: ••••••••".to_string()));
        assert!(!text.iter().any(|l| l.contains("Confirm Password")));
        assert!(!text.iter().any(|l| l.contains("hunter22")));
    }

    #[test]
    fn test_summary_marks_missing_optional_values() {
        let text = plain(&summary_lines(&VolunteerDraft::default()));
        assert!(text.contains(&"  Middle Name (optional): (none)".to_string()));
        assert!(text.contains(&"  State: VA".to_string()));
    }
}
