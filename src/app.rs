//! Application state and core logic

use crate::api::{RegistrationReceipt, SubmissionError};
use crate::state::{
    AppState, DraftField, FieldKind, FieldValue, FormButton, MrcLevel, RegistrationWizard,
    SessionContext, WizardPhase,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

type SubmissionResult = Result<RegistrationReceipt, SubmissionError>;

/// Main application struct
pub struct App {
    /// Presentation state
    pub state: AppState,
    /// The registration in progress
    pub wizard: RegistrationWizard,
    /// Results of background submissions
    submission_tx: mpsc::UnboundedSender<SubmissionResult>,
    submission_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance and probe the backend
    pub async fn new(context: SessionContext) -> Self {
        let online = context.api.check_health().await;
        if !online {
            tracing::warn!("registration backend is not reachable");
        }
        let mut app = Self::with_context(context);
        app.state.backend_online = Some(online);
        app
    }

    /// Create an App without probing the backend
    pub fn with_context(context: SessionContext) -> Self {
        let (submission_tx, submission_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            wizard: RegistrationWizard::new(context),
            submission_tx,
            submission_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply a finished background submission, if one arrived.
    /// Returns true when a result was applied.
    pub fn poll_submission(&mut self) -> bool {
        let Ok(result) = self.submission_rx.try_recv() else {
            return false;
        };
        self.wizard.finish_submit(result);
        self.state.status_message = match self.wizard.phase() {
            WizardPhase::Submitted { .. } => Some("Registration submitted".to_string()),
            _ => None,
        };
        true
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The error dialog swallows input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.wizard.is_submitted() {
            self.handle_submitted_key(key);
        } else {
            self.handle_wizard_key(key);
        }
        Ok(())
    }

    /// Handle keys on the success screen
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => {
                let context = self.wizard.context().clone();
                self.wizard = RegistrationWizard::new(context);
                self.state.reset_focus();
                self.state.status_message = None;
            }
            KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while filling in the form
    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let step = self.wizard.step();
        let active = self.state.active_field(step);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('n') if ctrl => self.go_forward(),
            KeyCode::Char('b') if ctrl => self.go_back(),
            KeyCode::Char('s') if ctrl => self.start_submission(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_into_active_field()
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(step),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(step),
            KeyCode::Esc => self.go_back(),
            KeyCode::Left | KeyCode::Right => match active {
                Some(field) if field.kind() == FieldKind::Choice => {
                    let cycle: fn(&MrcLevel) -> MrcLevel = if key.code == KeyCode::Left {
                        MrcLevel::prev
                    } else {
                        MrcLevel::next
                    };
                    let level = cycle(&self.wizard.draft().mrc_level);
                    self.wizard.update_field(field, FieldValue::Level(level));
                }
                None => {
                    self.state.form_selected_button = self.state.form_selected_button.toggle();
                }
                _ => {}
            },
            KeyCode::Enter => match active {
                None => self.activate_selected_button(),
                Some(field) if field.kind() == FieldKind::Toggle => self.toggle_field(field),
                Some(_) => self.state.next_form_field(step),
            },
            KeyCode::Char(' ') if active.is_some_and(|f| f.kind() == FieldKind::Toggle) => {
                if let Some(field) = active {
                    self.toggle_field(field);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = active.filter(DraftField::is_text) {
                    let mut text = self.wizard.draft().text(field).to_string();
                    text.push(c);
                    self.wizard.update_field(field, text);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = active.filter(DraftField::is_text) {
                    let mut text = self.wizard.draft().text(field).to_string();
                    text.pop();
                    self.wizard.update_field(field, text);
                }
            }
            _ => {}
        }
    }

    fn toggle_field(&mut self, field: DraftField) {
        if let FieldValue::Toggle(checked) = self.wizard.draft().value(field) {
            self.wizard.update_field(field, FieldValue::Toggle(!checked));
        }
    }

    fn activate_selected_button(&mut self) {
        match self.state.form_selected_button {
            FormButton::Back => self.go_back(),
            FormButton::Forward if self.wizard.step().is_last() => self.start_submission(),
            FormButton::Forward => self.go_forward(),
        }
    }

    /// Advance, or point at the first problem when the step does not validate
    fn go_forward(&mut self) {
        if self.wizard.advance() {
            self.state.reset_focus();
        } else {
            self.focus_first_error();
        }
    }

    fn go_back(&mut self) {
        if self.wizard.retreat() {
            self.state.reset_focus();
        }
    }

    fn focus_first_error(&mut self) {
        if let Some((field, _)) = self.wizard.errors().iter().next() {
            self.state.focus_field(self.wizard.step(), field);
        }
    }

    /// Send the registration on a background task.
    ///
    /// The result comes back through [`Self::poll_submission`]; repeated
    /// requests while one is in flight are ignored by the wizard.
    fn start_submission(&mut self) {
        if self.wizard.is_submitting() || !self.wizard.step().is_last() {
            return;
        }
        let Some(registration) = self.wizard.begin_submit() else {
            self.focus_first_error();
            return;
        };
        self.state.status_message = Some("Submitting registration…".to_string());

        let api = Arc::clone(&self.wizard.context().api);
        let tx = self.submission_tx.clone();
        tokio::spawn(async move {
            let result = api.submit_registration(&registration).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(result);
        });
    }

    fn paste_into_active_field(&mut self) {
        let Some(field) = self
            .state
            .active_field(self.wizard.step())
            .filter(DraftField::is_text)
        else {
            return;
        };
        match read_clipboard() {
            Ok(pasted) => {
                let mut text = self.wizard.draft().text(field).to_string();
                text.extend(pasted.chars().filter(|c| !c.is_control()));
                self.wizard.update_field(field, text);
            }
            Err(e) => self.push_error(format!("Failed to paste from clipboard: {e}")),
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRegistrationApi;
    use crate::state::Step;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn app_with(api: MockRegistrationApi) -> App {
        App::with_context(SessionContext::new(2, Arc::new(api)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_into(app: &mut App, field: DraftField, text: &str) {
        app.state.focus_field(app.wizard.step(), field);
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Fill every step through the keyboard and land on the review step
    async fn fill_form(app: &mut App) {
        type_into(app, DraftField::FirstName, "Jane").await;
        type_into(app, DraftField::LastName, "Doe").await;
        type_into(app, DraftField::Email, "jane@example.org").await;
        app.handle_key(ctrl('n')).await.unwrap();

        type_into(app, DraftField::PhonePrimary, "8045550100").await;
        type_into(app, DraftField::AddressLine1, "1 Main St").await;
        type_into(app, DraftField::City, "Richmond").await;
        type_into(app, DraftField::ZipCode, "23219").await;
        app.handle_key(ctrl('n')).await.unwrap();

        type_into(app, DraftField::EmergencyName, "John Doe").await;
        type_into(app, DraftField::EmergencyPhone, "8045550101").await;
        app.handle_key(ctrl('n')).await.unwrap();

        type_into(app, DraftField::Username, "jdoe").await;
        type_into(app, DraftField::Password, "hunter22").await;
        type_into(app, DraftField::ConfirmPassword, "hunter22").await;
        app.handle_key(ctrl('n')).await.unwrap();

        assert_eq!(app.wizard.step(), Step::Review);
        app.state.focus_field(Step::Review, DraftField::AcceptTerms);
        app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        assert!(app.wizard.draft().accept_terms);
    }

    async fn wait_for_submission(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !app.poll_submission() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("submission result should arrive");
    }

    #[tokio::test]
    async fn test_new_records_backend_health() {
        let mut api = MockRegistrationApi::new();
        api.expect_check_health().times(1).returning(|| false);
        let app = App::new(SessionContext::new(1, Arc::new(api))).await;
        assert_eq!(app.state.backend_online, Some(false));
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_edits_active_field() {
        let mut app = app_with(MockRegistrationApi::new());
        type_into(&mut app, DraftField::FirstName, "Jo").await;
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        type_into(&mut app, DraftField::FirstName, "e").await;
        assert_eq!(app.wizard.draft().first_name, "Je");
    }

    #[tokio::test]
    async fn test_tab_moves_focus() {
        let mut app = app_with(MockRegistrationApi::new());
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert_eq!(
            app.state.active_field(Step::Personal),
            Some(DraftField::MiddleName)
        );
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        assert!(app.state.is_buttons_row_active(Step::Personal));
    }

    #[tokio::test]
    async fn test_blocked_advance_focuses_first_error() {
        let mut app = app_with(MockRegistrationApi::new());
        type_into(&mut app, DraftField::FirstName, "Jane").await;
        type_into(&mut app, DraftField::LastName, "Doe").await;
        type_into(&mut app, DraftField::Email, "bad").await;
        app.handle_key(ctrl('n')).await.unwrap();

        assert_eq!(app.wizard.step(), Step::Personal);
        assert_eq!(
            app.state.active_field(Step::Personal),
            Some(DraftField::Email)
        );
    }

    #[tokio::test]
    async fn test_submit_shortcut_ignored_before_review_step() {
        let mut app = app_with(MockRegistrationApi::new());
        type_into(&mut app, DraftField::Email, "bad").await;
        app.handle_key(ctrl('n')).await.unwrap();
        assert!(app.wizard.error_for(DraftField::FirstName).is_some());

        app.state.focus_field(Step::Personal, DraftField::Email);
        app.handle_key(ctrl('s')).await.unwrap();

        assert_eq!(app.wizard.step(), Step::Personal);
        assert!(!app.wizard.is_submitting());
        assert_eq!(
            app.state.active_field(Step::Personal),
            Some(DraftField::Email)
        );
        assert!(app.state.status_message.is_none());
    }

    #[tokio::test]
    async fn test_choice_field_cycles_with_arrows() {
        let mut app = app_with(MockRegistrationApi::new());
        fill_form(&mut app).await;
        app.state.focus_field(Step::Review, DraftField::MrcLevel);
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.wizard.draft().mrc_level, MrcLevel::Level2);
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(app.wizard.draft().mrc_level, MrcLevel::Level3);
    }

    #[tokio::test]
    async fn test_submit_in_background_only_once() {
        let mut api = MockRegistrationApi::new();
        api.expect_submit_registration()
            .times(1)
            .returning(|_| Ok(RegistrationReceipt { id: 31 }));
        let mut app = app_with(api);
        fill_form(&mut app).await;

        app.handle_key(ctrl('s')).await.unwrap();
        assert!(app.wizard.is_submitting());
        app.handle_key(ctrl('s')).await.unwrap();

        wait_for_submission(&mut app).await;
        assert_eq!(
            app.wizard.phase(),
            WizardPhase::Submitted { volunteer_id: 31 }
        );
        assert!(!app.poll_submission());
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Registration submitted")
        );
    }

    #[tokio::test]
    async fn test_submit_button_on_review_step() {
        let mut api = MockRegistrationApi::new();
        api.expect_submit_registration().times(1).returning(|_| {
            Err(SubmissionError::Rejected {
                status: 400,
                detail: "Email already registered".to_string(),
            })
        });
        let mut app = app_with(api);
        fill_form(&mut app).await;
        app.state.focus_field(Step::Review, DraftField::AcceptTerms);
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert!(app.state.is_buttons_row_active(Step::Review));
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        wait_for_submission(&mut app).await;
        assert_eq!(app.wizard.submit_error(), Some("Email already registered"));
        assert_eq!(app.wizard.step(), Step::Review);
        assert_eq!(app.wizard.draft().username, "jdoe");
    }

    #[tokio::test]
    async fn test_back_button_and_escape_retreat() {
        let mut app = app_with(MockRegistrationApi::new());
        fill_form(&mut app).await;
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.wizard.step(), Step::Account);

        app.state.prev_form_field(Step::Account);
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(app.state.form_selected_button, FormButton::Back);
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.wizard.step(), Step::EmergencyContact);
        assert_eq!(app.state.active_form_field, 0);
    }

    #[tokio::test]
    async fn test_error_dialog_swallows_keys_until_dismissed() {
        let mut app = app_with(MockRegistrationApi::new());
        app.push_error("Failed to paste from clipboard");
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(app.wizard.draft().first_name, "");

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.current_error().is_none());
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(app.wizard.draft().first_name, "x");
    }

    #[tokio::test]
    async fn test_new_registration_after_success() {
        let mut api = MockRegistrationApi::new();
        api.expect_submit_registration()
            .times(1)
            .returning(|_| Ok(RegistrationReceipt { id: 5 }));
        let mut app = app_with(api);
        fill_form(&mut app).await;
        app.handle_key(ctrl('s')).await.unwrap();
        wait_for_submission(&mut app).await;

        app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
        assert_eq!(app.wizard.step(), Step::Personal);
        assert_eq!(app.wizard.phase(), WizardPhase::Editing);
        assert_eq!(app.wizard.context().tenant_id, 2);

        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_quit_from_success_screen() {
        let mut api = MockRegistrationApi::new();
        api.expect_submit_registration()
            .returning(|_| Ok(RegistrationReceipt { id: 5 }));
        let mut app = app_with(api);
        fill_form(&mut app).await;
        app.handle_key(ctrl('s')).await.unwrap();
        wait_for_submission(&mut app).await;

        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }
}
