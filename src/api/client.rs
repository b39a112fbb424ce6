//! HTTP client for communicating with the VVHS backend
//!
//! This is the single client the TUI uses for the backend's REST API.

use super::error::SubmissionError;
use super::traits::{RegistrationApi, RegistrationReceipt};
use crate::config::ClientConfig;
use crate::state::VolunteerRegistration;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

/// Header carrying the per-request correlation id
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Client for the VVHS REST API
pub struct ApiClient {
    http: Client,
    base_url: String,
    registration_path: String,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .user_agent(concat!("vvhs-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            registration_path: config.registration_path().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn check_health(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("health check failed: {e}");
                false
            }
        }
    }

    async fn submit_registration(
        &self,
        registration: &VolunteerRegistration,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            tenant_id = registration.tenant_id,
            "submitting volunteer registration"
        );

        let response = self
            .http
            .post(self.url(&self.registration_path))
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(registration)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if !status.is_success() {
            let err = SubmissionError::from_response(status.as_u16(), &body);
            tracing::warn!(%request_id, status = status.as_u16(), "registration rejected: {err}");
            return Err(err);
        }

        let receipt: RegistrationReceipt = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%request_id, "unreadable registration response: {e}");
            SubmissionError::UnexpectedResponse
        })?;
        tracing::info!(%request_id, volunteer_id = receipt.id, "registration accepted");
        Ok(receipt)
    }
}
