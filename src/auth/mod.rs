//! Authentication backend module
//!
//! The flows talk to an [`AuthBackend`] trait object so the simulated
//! implementation can later be swapped for a real API client without
//! touching page logic.

mod client;
mod traits;

pub use client::SimulatedAuth;
pub use traits::AuthBackend;

#[cfg(test)]
pub use traits::MockAuthBackend;

use thiserror::Error;

/// Known social-login provider identifiers
pub const PROVIDER_GOOGLE: &str = "google";
pub const PROVIDER_GITHUB: &str = "github";

/// Transport-level backend failure.
///
/// The simulated backend never produces one; a real client would map
/// connection and protocol errors here. Business rejections (wrong
/// credentials, expired token) are [`SubmissionResult::Failure`] values,
/// not errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication service unreachable: {0}")]
    Unreachable(String),
}

/// Outcome of one submission attempt, consumed to render a banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { message: String },
    Failure { message: String },
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message } => message,
        }
    }
}

/// Login payload
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Registration payload
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Reset-password payload; the token comes from the route, not the form
#[derive(Debug, Clone)]
pub struct ResetRequest {
    pub token: Option<String>,
    pub new_password: String,
}
