//! Application state definitions

use super::forms::{DraftField, Step};
use std::collections::VecDeque;

/// Buttons shown below the fields of every step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Back,
    /// "Next" on steps 1-4, "Submit" on the review step
    #[default]
    Forward,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }
}

/// Presentation state that is not part of the registration itself
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Index of the focused field on the current step; the index one past
    /// the last field is the buttons row
    pub active_form_field: usize,
    /// Which button is selected when on the buttons row
    pub form_selected_button: FormButton,
    /// Application errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// Transient message for the status bar
    pub status_message: Option<String>,
    /// Result of the last backend health check
    pub backend_online: Option<bool>,
}

impl AppState {
    /// Queue an error to be shown in the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Focus the first field, as when a step is entered
    pub fn reset_focus(&mut self) {
        self.active_form_field = 0;
        self.form_selected_button = FormButton::default();
    }

    /// Number of focus positions on a step (fields plus the buttons row)
    fn focus_count(step: Step) -> usize {
        step.fields().len() + 1
    }

    /// Move to next form field
    pub fn next_form_field(&mut self, step: Step) {
        self.active_form_field = (self.active_form_field + 1) % Self::focus_count(step);
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self, step: Step) {
        if self.active_form_field == 0 {
            self.active_form_field = Self::focus_count(step) - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn is_buttons_row_active(&self, step: Step) -> bool {
        self.active_form_field >= step.fields().len()
    }

    /// The focused field, or `None` on the buttons row
    pub fn active_field(&self, step: Step) -> Option<DraftField> {
        step.fields().get(self.active_form_field).copied()
    }

    /// Focus a specific field of the step, if it is on it
    pub fn focus_field(&mut self, step: Step, field: DraftField) {
        if let Some(index) = step.fields().iter().position(|f| *f == field) {
            self.active_form_field = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_first_field() {
        let state = AppState::default();
        assert_eq!(state.active_field(Step::Personal), Some(DraftField::FirstName));
        assert_eq!(state.form_selected_button, FormButton::Forward);
    }

    #[test]
    fn test_next_field_wraps_through_buttons_row() {
        let mut state = AppState::default();
        let step = Step::Review;
        state.next_form_field(step);
        assert_eq!(state.active_field(step), Some(DraftField::AcceptTerms));
        state.next_form_field(step);
        assert!(state.is_buttons_row_active(step));
        assert_eq!(state.active_field(step), None);
        state.next_form_field(step);
        assert_eq!(state.active_form_field, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_buttons_row() {
        let mut state = AppState::default();
        state.prev_form_field(Step::Account);
        assert!(state.is_buttons_row_active(Step::Account));
        assert_eq!(state.active_form_field, 3);
    }

    #[test]
    fn test_focus_field() {
        let mut state = AppState::default();
        state.focus_field(Step::Contact, DraftField::City);
        assert_eq!(state.active_field(Step::Contact), Some(DraftField::City));
        state.focus_field(Step::Contact, DraftField::Email);
        assert_eq!(state.active_field(Step::Contact), Some(DraftField::City));
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_button_toggle() {
        assert_eq!(FormButton::Back.toggle(), FormButton::Forward);
        assert_eq!(FormButton::Forward.toggle(), FormButton::Back);
    }

    #[test]
    fn test_reset_focus() {
        let mut state = AppState {
            active_form_field: 4,
            form_selected_button: FormButton::Back,
            ..Default::default()
        };
        state.reset_focus();
        assert_eq!(state.active_form_field, 0);
        assert_eq!(state.form_selected_button, FormButton::Forward);
    }
}
