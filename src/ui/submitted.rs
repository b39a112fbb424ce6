//! Success screen shown once the registration is accepted

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, volunteer_id: i64) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(56),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let content = vec![
        Line::from(Span::styled(
            "Thank you for registering!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Volunteer ID: "),
            Span::styled(
                volunteer_id.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from("Your application is pending review."),
        Line::from(""),
        Line::from(vec![
            Span::styled("n", key_style),
            Span::raw(": new registration  "),
            Span::styled("q", key_style),
            Span::raw(": quit"),
        ]),
    ];

    let panel = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Registration submitted ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(panel, columns[1]);
}
