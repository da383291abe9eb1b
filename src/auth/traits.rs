//! Trait abstraction for the auth backend to enable mocking in tests

use super::{AuthError, Credentials, RegistrationRequest, ResetRequest, SubmissionResult};
use async_trait::async_trait;

/// Backend operations for the four authentication flows plus social login.
///
/// Payloads are taken by value: submissions run on a spawned task that
/// outlives the borrow of the form they came from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Attempt a credential login
    async fn login(&self, credentials: Credentials) -> Result<SubmissionResult, AuthError>;

    /// Create a new account
    async fn register(&self, request: RegistrationRequest)
        -> Result<SubmissionResult, AuthError>;

    /// Request a password-reset link for an email address
    async fn request_password_reset(&self, email: String)
        -> Result<SubmissionResult, AuthError>;

    /// Complete a password reset using a token from the reset link
    async fn reset_password(&self, request: ResetRequest)
        -> Result<SubmissionResult, AuthError>;

    /// Start a social-login exchange with a third-party provider
    async fn social_login(&self, provider: String) -> Result<SubmissionResult, AuthError>;
}
