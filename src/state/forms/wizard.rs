//! Multi-step registration controller
//!
//! Owns the draft, the current step and the per-field errors. Forward
//! navigation is gated on the current step validating; backward navigation
//! always succeeds. Submission happens once, from the last step.

use super::draft::{VolunteerDraft, VolunteerRegistration};
use super::field::{DraftField, FieldValue};
use super::step::Step;
use super::validation::{validate_step, ErrorMap};
use crate::api::{RegistrationReceipt, SubmissionError};
use crate::state::SessionContext;
use std::sync::Arc;

/// Where the wizard is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    #[default]
    Editing,
    /// A submission request is in flight
    Submitting,
    /// Terminal state after the backend accepted the registration
    Submitted { volunteer_id: i64 },
}

pub struct RegistrationWizard {
    context: SessionContext,
    draft: VolunteerDraft,
    step: Step,
    errors: ErrorMap,
    submit_error: Option<String>,
    phase: WizardPhase,
}

impl RegistrationWizard {
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            draft: VolunteerDraft::default(),
            step: Step::default(),
            errors: ErrorMap::new(),
            submit_error: None,
            phase: WizardPhase::default(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn draft(&self) -> &VolunteerDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: DraftField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Top-level message from the last failed submission
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, WizardPhase::Submitted { .. })
    }

    /// Write a field and drop its stale error
    pub fn update_field(&mut self, field: DraftField, value: impl Into<FieldValue>) {
        if self.phase != WizardPhase::Editing {
            return;
        }
        let value = value.into();
        if !self.draft.set(field, value) {
            tracing::warn!("ignored value of the wrong kind for {field}");
            return;
        }
        self.errors.remove(field);
    }

    /// Move forward if the current step validates. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.phase != WizardPhase::Editing {
            return false;
        }
        self.errors = validate_step(self.step, &self.draft);
        if !self.errors.is_empty() {
            tracing::debug!(
                step = self.step.number(),
                errors = self.errors.len(),
                "step blocked by validation"
            );
            return false;
        }
        let next = self.step.next();
        let moved = next != self.step;
        if moved {
            tracing::debug!(from = self.step.number(), to = next.number(), "advanced");
        }
        self.step = next;
        moved
    }

    /// Move back one step without validating. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.phase != WizardPhase::Editing {
            return false;
        }
        let prev = self.step.prev();
        let moved = prev != self.step;
        if moved {
            tracing::debug!(from = self.step.number(), to = prev.number(), "retreated");
        }
        self.step = prev;
        moved
    }

    /// Start a submission.
    ///
    /// Returns the payload to send, or `None` when not on the last step,
    /// already submitting or submitted, or the last step does not validate.
    /// A returned payload must be answered with [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> Option<VolunteerRegistration> {
        if self.phase != WizardPhase::Editing || !self.step.is_last() {
            return None;
        }
        self.errors = validate_step(self.step, &self.draft);
        if !self.errors.is_empty() {
            return None;
        }
        self.submit_error = None;
        self.phase = WizardPhase::Submitting;
        Some(self.draft.to_registration(self.context.tenant_id))
    }

    /// Apply the backend's answer to a submission started by [`Self::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<RegistrationReceipt, SubmissionError>) {
        if self.phase != WizardPhase::Submitting {
            tracing::warn!("submission result arrived with no submission in flight");
            return;
        }
        match result {
            Ok(receipt) => {
                tracing::info!(volunteer_id = receipt.id, "volunteer registered");
                self.phase = WizardPhase::Submitted {
                    volunteer_id: receipt.id,
                };
                self.draft = VolunteerDraft::default();
                self.errors.clear();
            }
            Err(err) => {
                tracing::warn!(status = ?err.status(), "registration failed: {err}");
                self.submit_error = Some(err.to_string());
                self.phase = WizardPhase::Editing;
            }
        }
    }

    /// Submit through the context's backend and wait for the answer.
    ///
    /// Returns true when this call completed the registration.
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> bool {
        let Some(registration) = self.begin_submit() else {
            return false;
        };
        let api = Arc::clone(&self.context.api);
        let result = api.submit_registration(&registration).await;
        self.finish_submit(result);
        self.is_submitted()
    }
}
