//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::WizardPhase;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.wizard.phase() {
        WizardPhase::Submitted { volunteer_id } => submitted::draw(frame, main_area, volunteer_id),
        WizardPhase::Editing | WizardPhase::Submitting => forms::draw_step(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog goes on top of everything
    if let Some(message) = app.state.current_error() {
        let pending = app.state.error_queue.len().saturating_sub(1);
        render_error_dialog(frame, message, pending);
    }
}
