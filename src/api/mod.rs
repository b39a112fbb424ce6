//! REST client module for the VVHS backend

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::SubmissionError;
pub use traits::{RegistrationApi, RegistrationReceipt};

#[cfg(test)]
pub use traits::MockRegistrationApi;
