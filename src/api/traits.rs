//! Trait abstraction for the registration backend to enable mocking in tests

use super::error::SubmissionError;
use crate::state::VolunteerRegistration;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Success payload of a registration; only the new volunteer's id is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub id: i64,
}

/// Operations the registration wizard needs from the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Check if the backend answers its health endpoint
    async fn check_health(&self) -> bool;

    /// Submit a completed registration
    async fn submit_registration(
        &self,
        registration: &VolunteerRegistration,
    ) -> Result<RegistrationReceipt, SubmissionError>;
}
