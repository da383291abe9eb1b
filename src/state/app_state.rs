//! Application state definitions

use crate::state::{
    ForgotPasswordForm, FormState, LoginForm, RegistrationForm, ResetPasswordForm,
};

/// Current view in the application, one per route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Placeholder homepage shown after a successful login
    Home,
    #[default]
    Login,
    Registration,
    ForgotPassword,
    ResetPassword,
    /// Catch-all for unmatched routes
    NotFound,
}

impl View {
    /// Whether the view hosts a form with text input
    pub fn is_form_view(&self) -> bool {
        matches!(
            self,
            View::Login | View::Registration | View::ForgotPassword | View::ResetPassword
        )
    }
}

/// Visual flavor of a page-level banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

/// Inline page-level message rendered above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: String,
    pub text: String,
}

impl Banner {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// UI-scoped application state: the current view, its form, and any banner.
///
/// Form state lives only as long as its view; navigating away discards it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormState,
    pub banner: Option<Banner>,
}

impl AppState {
    /// Build the fresh form state for a view being entered.
    ///
    /// `reset_token` feeds the reset-password form; `remembered_email`
    /// prefills the login email.
    pub fn form_for(
        view: &View,
        reset_token: Option<String>,
        remembered_email: Option<&str>,
    ) -> FormState {
        match view {
            View::Login => FormState::Login(match remembered_email {
                Some(email) => LoginForm::with_email(email.to_string()),
                None => LoginForm::new(),
            }),
            View::Registration => FormState::Registration(RegistrationForm::new()),
            View::ForgotPassword => FormState::ForgotPassword(ForgotPasswordForm::new()),
            View::ResetPassword => FormState::ResetPassword(ResetPasswordForm::new(reset_token)),
            View::Home | View::NotFound => FormState::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_login() {
        assert_eq!(View::default(), View::Login);
    }

    #[test]
    fn test_form_views() {
        assert!(View::Login.is_form_view());
        assert!(View::Registration.is_form_view());
        assert!(View::ForgotPassword.is_form_view());
        assert!(View::ResetPassword.is_form_view());
        assert!(!View::Home.is_form_view());
        assert!(!View::NotFound.is_form_view());
    }

    #[test]
    fn test_form_for_builds_flow_forms() {
        assert!(matches!(
            AppState::form_for(&View::Login, None, None),
            FormState::Login(_)
        ));
        assert!(matches!(
            AppState::form_for(&View::Registration, None, None),
            FormState::Registration(_)
        ));
        assert!(matches!(
            AppState::form_for(&View::Home, None, None),
            FormState::None
        ));
    }

    #[test]
    fn test_form_for_prefills_remembered_email() {
        let form = AppState::form_for(&View::Login, None, Some("user@example.com"));
        match form {
            FormState::Login(f) => assert_eq!(f.email.as_text(), "user@example.com"),
            other => panic!("expected login form, got {other:?}"),
        }
    }

    #[test]
    fn test_form_for_threads_reset_token() {
        let form = AppState::form_for(&View::ResetPassword, Some("tok".to_string()), None);
        match form {
            FormState::ResetPassword(f) => assert_eq!(f.token.as_deref(), Some("tok")),
            other => panic!("expected reset form, got {other:?}"),
        }
    }
}
