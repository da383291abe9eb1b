//! Simulated authentication backend
//!
//! Stands in for a real API: every operation suspends for a fixed
//! interval and resolves a hard-coded or trivially-derived outcome.
//! There is no persistence, token issuance, or network traffic.

use super::{AuthError, Credentials, RegistrationRequest, ResetRequest, SubmissionResult};
use super::traits::AuthBackend;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Delay applied to form submissions
const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// Delay applied to social-login exchanges
const SOCIAL_DELAY: Duration = Duration::from_millis(2000);

/// The one credential pair the simulator accepts
const DEMO_EMAIL: &str = "user@example.com";
const DEMO_PASSWORD: &str = "password";

/// Fixed-delay, fixed-outcome backend used until a real one exists
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAuth;

impl SimulatedAuth {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuth {
    async fn login(&self, credentials: Credentials) -> Result<SubmissionResult, AuthError> {
        tracing::debug!(email = %credentials.email, "login submitted");
        sleep(SUBMIT_DELAY).await;
        if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
            tracing::info!("login successful");
            Ok(SubmissionResult::success("Logged in."))
        } else {
            Ok(SubmissionResult::failure(
                "Invalid email or password. Please try again.",
            ))
        }
    }

    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<SubmissionResult, AuthError> {
        tracing::debug!(email = %request.email, "registration submitted");
        sleep(SUBMIT_DELAY).await;
        // Always succeeds until a real account store exists
        tracing::info!(email = %request.email, "registration successful");
        Ok(SubmissionResult::success(
            "Registration successful! Please log in.",
        ))
    }

    async fn request_password_reset(
        &self,
        email: String,
    ) -> Result<SubmissionResult, AuthError> {
        tracing::debug!(%email, "password reset requested");
        sleep(SUBMIT_DELAY).await;
        // Deliberately does not reveal whether the account exists
        Ok(SubmissionResult::success(
            "If an account with that email exists, a password reset link has been sent.",
        ))
    }

    async fn reset_password(&self, request: ResetRequest) -> Result<SubmissionResult, AuthError> {
        tracing::debug!(token = ?request.token, "password reset submitted");
        sleep(SUBMIT_DELAY).await;
        if request.token.is_some() {
            Ok(SubmissionResult::success(
                "Your password has been successfully reset. \
                 You can now log in with your new password.",
            ))
        } else {
            Ok(SubmissionResult::failure(
                "Failed to reset password. The reset link may be invalid or expired.",
            ))
        }
    }

    async fn social_login(&self, provider: String) -> Result<SubmissionResult, AuthError> {
        tracing::debug!(%provider, "social login attempted");
        sleep(SOCIAL_DELAY).await;
        // The OAuth exchange is a stub: the flow "initiates" and nothing more
        tracing::info!(%provider, "social login flow initiated");
        Ok(SubmissionResult::success(format!(
            "{provider} login flow initiated."
        )))
    }
}
