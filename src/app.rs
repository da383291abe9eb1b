//! Application state and core logic

use crate::auth::{
    AuthBackend, AuthError, SubmissionResult, PROVIDER_GITHUB, PROVIDER_GOOGLE,
};
use crate::config::AuthConfig;
use crate::routes::Route;
use crate::state::{AppState, Banner, Form, FormState, View};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long the reset-password success banner stays before redirecting
const RESET_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Which flow an in-flight submission belongs to, with the data needed
/// to apply its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionKind {
    Login { email: String, remember_me: bool },
    Registration,
    ForgotPassword,
    ResetPassword,
    Social { provider: String },
}

/// An in-flight simulated submission.
///
/// There is at most one: while it is pending the submit and social
/// controls no-op. It is never cancelled; once started it always
/// resolves and its outcome is always applied.
pub struct PendingSubmission {
    pub kind: SubmissionKind,
    pub started: Instant,
    handle: JoinHandle<Result<SubmissionResult, AuthError>>,
}

/// A navigation scheduled for a later instant (reset success → login)
struct DelayedRedirect {
    due: Instant,
    view: View,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Authentication backend (simulated for now)
    backend: Arc<dyn AuthBackend>,
    /// Persisted user configuration
    pub config: AuthConfig,
    /// The single in-flight submission, if any
    pending: Option<PendingSubmission>,
    redirect: Option<DelayedRedirect>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance positioned at the given route
    pub fn new(route: &Route, backend: Arc<dyn AuthBackend>, config: AuthConfig) -> Self {
        let mut state = AppState {
            current_view: route.view(),
            ..Default::default()
        };
        state.form = AppState::form_for(
            &state.current_view,
            route.reset_token(),
            config.remembered_email.as_deref(),
        );

        // A reset link without a token fails eagerly, before any input
        if matches!(state.current_view, View::ResetPassword) && route.reset_token().is_none() {
            state.banner = Some(Banner::error(
                "Error",
                "Invalid or missing reset token. Please request a new password reset.",
            ));
        }

        Self {
            state,
            backend,
            config,
            pending: None,
            redirect: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Whether a submission is in flight (submit controls are disabled)
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// How long the current submission has been running, for the busy
    /// indicator
    pub fn loading_elapsed(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.started.elapsed())
    }

    /// Navigate to a view, discarding the old view's form state
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(?view, "navigating");
        self.state.form =
            AppState::form_for(&view, None, self.config.remembered_email.as_deref());
        self.state.banner = None;
        self.redirect = None;
        self.state.current_view = view;
    }

    /// Advance timed work: apply a due redirect and fold in a finished
    /// submission. Called once per event-loop iteration.
    pub async fn tick(&mut self) -> Result<()> {
        if let Some(redirect) = &self.redirect {
            if Instant::now() >= redirect.due {
                let view = redirect.view.clone();
                self.navigate(view);
            }
        }

        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.handle.is_finished())
        {
            self.finish_submission().await?;
        }

        Ok(())
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::NotFound => self.handle_not_found_key(key),
            View::Login
            | View::Registration
            | View::ForgotPassword
            | View::ResetPassword => self.handle_form_key(key),
        }
        Ok(())
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('l') | KeyCode::Enter = key.code {
            // Simulated logout
            self.navigate(View::Login);
        }
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('h') | KeyCode::Enter = key.code {
            self.navigate(View::Home);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // Navigation shortcuts (links in the web layout)
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match (key.code, &self.state.current_view) {
                (KeyCode::Char('n'), View::Login) => {
                    self.navigate(View::Registration);
                    return;
                }
                (KeyCode::Char('f'), View::Login | View::ResetPassword) => {
                    self.navigate(View::ForgotPassword);
                    return;
                }
                (
                    KeyCode::Char('l'),
                    View::Registration | View::ForgotPassword | View::ResetPassword,
                ) => {
                    self.navigate(View::Login);
                    return;
                }
                (KeyCode::Char('r'), _) => {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        if field.is_secret() {
                            field.toggle();
                        }
                    }
                    return;
                }
                _ => return,
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if self.state.form.is_buttons_row_active() => {
                self.state.form.prev_button();
            }
            KeyCode::Right if self.state.form.is_buttons_row_active() => {
                self.state.form.next_button();
            }
            KeyCode::Enter => {
                if self.state.form.is_buttons_row_active() {
                    self.activate_selected_button();
                } else {
                    // Enter in a field submits the form, as on the web
                    self.submit();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Activate the selected button on the buttons row
    fn activate_selected_button(&mut self) {
        let selected = self
            .state
            .form
            .as_form()
            .map(|f| f.selected_button())
            .unwrap_or(0);
        let has_socials = matches!(
            self.state.form,
            FormState::Login(_) | FormState::Registration(_)
        );
        match (has_socials, selected) {
            (true, 1) => self.social_login(PROVIDER_GOOGLE),
            (true, 2) => self.social_login(PROVIDER_GITHUB),
            _ => self.submit(),
        }
    }

    /// Validate and dispatch the current form.
    ///
    /// No-ops while a submission is pending; invalid input never reaches
    /// the backend.
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }

        match &mut self.state.form {
            FormState::Login(form) => {
                if !form.validate() {
                    return;
                }
                let credentials = form.credentials();
                let kind = SubmissionKind::Login {
                    email: credentials.email.clone(),
                    remember_me: credentials.remember_me,
                };
                let backend = Arc::clone(&self.backend);
                self.start_submission(
                    kind,
                    tokio::spawn(async move { backend.login(credentials).await }),
                );
            }
            FormState::Registration(form) => {
                if !form.validate() {
                    return;
                }
                let request = form.request();
                let backend = Arc::clone(&self.backend);
                self.start_submission(
                    SubmissionKind::Registration,
                    tokio::spawn(async move { backend.register(request).await }),
                );
            }
            FormState::ForgotPassword(form) => {
                if !form.validate() {
                    return;
                }
                let email = form.email().to_string();
                let backend = Arc::clone(&self.backend);
                self.start_submission(
                    SubmissionKind::ForgotPassword,
                    tokio::spawn(async move { backend.request_password_reset(email).await }),
                );
            }
            FormState::ResetPassword(form) => {
                // Without a token the control stays disabled for the
                // lifetime of the view
                if !form.has_token() || !form.validate() {
                    return;
                }
                let request = form.request();
                let backend = Arc::clone(&self.backend);
                self.start_submission(
                    SubmissionKind::ResetPassword,
                    tokio::spawn(async move { backend.reset_password(request).await }),
                );
            }
            FormState::None => {}
        }
    }

    /// Start a social-login exchange; no-ops while a submission is pending
    pub fn social_login(&mut self, provider: &str) {
        if self.pending.is_some() {
            return;
        }
        tracing::debug!(%provider, "social login triggered");
        let provider = provider.to_string();
        let kind = SubmissionKind::Social {
            provider: provider.clone(),
        };
        let backend = Arc::clone(&self.backend);
        self.start_submission(
            kind,
            tokio::spawn(async move { backend.social_login(provider).await }),
        );
    }

    fn start_submission(
        &mut self,
        kind: SubmissionKind,
        handle: JoinHandle<Result<SubmissionResult, AuthError>>,
    ) {
        self.state.banner = None;
        self.pending = Some(PendingSubmission {
            kind,
            started: Instant::now(),
            handle,
        });
    }

    /// Await the completed submission task and apply its outcome
    async fn finish_submission(&mut self) -> Result<()> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        let result = pending
            .handle
            .await
            .context("submission task failed")?;
        match result {
            Ok(outcome) => self.apply_result(pending.kind, outcome),
            Err(err) => {
                tracing::warn!(%err, "backend error");
                self.state.banner = Some(Banner::error("Error", err.to_string()));
            }
        }
        Ok(())
    }

    fn apply_result(&mut self, kind: SubmissionKind, result: SubmissionResult) {
        match kind {
            SubmissionKind::Login { email, remember_me } => match result {
                SubmissionResult::Success { .. } => {
                    self.remember_email(email, remember_me);
                    self.navigate(View::Home);
                }
                SubmissionResult::Failure { message } => {
                    self.state.banner = Some(Banner::error("Login Failed", message));
                }
            },
            SubmissionKind::Registration => match result {
                SubmissionResult::Success { message } => {
                    // Land on login with a success marker, like
                    // /login?registered=true did
                    self.navigate(View::Login);
                    self.state.banner = Some(Banner::info("Account Created", message));
                }
                SubmissionResult::Failure { message } => {
                    self.state.banner = Some(Banner::error("Registration Failed", message));
                }
            },
            SubmissionKind::ForgotPassword => match result {
                SubmissionResult::Success { message } => {
                    if let FormState::ForgotPassword(form) = &mut self.state.form {
                        form.email.clear();
                    }
                    self.state.banner = Some(Banner::success("Check Your Email", message));
                }
                SubmissionResult::Failure { message } => {
                    self.state.banner = Some(Banner::error("Error", message));
                }
            },
            SubmissionKind::ResetPassword => match result {
                SubmissionResult::Success { message } => {
                    if let FormState::ResetPassword(form) = &mut self.state.form {
                        form.new_password.clear();
                        form.confirm_password.clear();
                    }
                    self.state.banner = Some(Banner::success("Password Reset", message));
                    self.redirect = Some(DelayedRedirect {
                        due: Instant::now() + RESET_REDIRECT_DELAY,
                        view: View::Login,
                    });
                }
                SubmissionResult::Failure { message } => {
                    self.state.banner = Some(Banner::error("Error", message));
                }
            },
            SubmissionKind::Social { provider } => {
                // The OAuth exchange never completes; nothing to apply
                tracing::debug!(%provider, outcome = %result.message(), "social login resolved");
            }
        }
    }

    fn remember_email(&mut self, email: String, remember_me: bool) {
        self.config.remembered_email = remember_me.then_some(email);
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "failed to save config");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthBackend;
    use crate::state::BannerKind;
    use tokio::time::advance;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_at(path: &str, backend: MockAuthBackend) -> App {
        App::new(&Route::parse(path), Arc::new(backend), AuthConfig::default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Drive the event loop until the pending submission is applied
    async fn settle(app: &mut App) {
        while app.is_loading() {
            tokio::task::yield_now().await;
            app.tick().await.unwrap();
        }
    }

    fn fill_login(app: &mut App, email: &str, password: &str) {
        type_str(app, email);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, password);
    }

    #[tokio::test]
    async fn test_login_success_navigates_home() {
        let mut backend = MockAuthBackend::new();
        backend
            .expect_login()
            .times(1)
            .returning(|_| Ok(SubmissionResult::success("Logged in.")));
        let mut app = app_at("/login", backend);

        fill_login(&mut app, "user@example.com", "password");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.is_loading());

        settle(&mut app).await;
        assert_eq!(app.state.current_view, View::Home);
        assert!(app.state.banner.is_none());
    }

    #[tokio::test]
    async fn test_login_failure_shows_banner_without_navigation() {
        let mut backend = MockAuthBackend::new();
        backend.expect_login().times(1).returning(|_| {
            Ok(SubmissionResult::failure(
                "Invalid email or password. Please try again.",
            ))
        });
        let mut app = app_at("/login", backend);

        fill_login(&mut app, "user@example.com", "wrongpass");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Login);
        let banner = app.state.banner.as_ref().expect("failure banner");
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.title, "Login Failed");
        // Form stays editable for retry
        assert!(app.state.form.get_active_field_mut().is_some());
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_submission() {
        // No expectation set: any backend call would panic the mock
        let mut app = app_at("/login", MockAuthBackend::new());

        fill_login(&mut app, "not-an-email", "password");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(!app.is_loading());
        if let FormState::Login(form) = &app.state.form {
            assert_eq!(form.email.error.as_deref(), Some("Invalid email address."));
        } else {
            panic!("expected login form");
        }
    }

    #[tokio::test]
    async fn test_short_password_blocks_submission() {
        let mut app = app_at("/login", MockAuthBackend::new());

        fill_login(&mut app, "user@example.com", "12345");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn test_resubmit_while_pending_is_noop() {
        let mut backend = MockAuthBackend::new();
        backend
            .expect_login()
            .times(1)
            .returning(|_| Ok(SubmissionResult::success("Logged in.")));
        let mut app = app_at("/login", backend);

        fill_login(&mut app, "user@example.com", "password");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.is_loading());
        // Second submit and a social trigger must not dispatch again
        app.submit();
        app.social_login(PROVIDER_GOOGLE);
        settle(&mut app).await;
        assert_eq!(app.state.current_view, View::Home);
    }

    #[tokio::test]
    async fn test_social_login_resolves_without_navigation() {
        let mut backend = MockAuthBackend::new();
        backend
            .expect_social_login()
            .times(1)
            .returning(|p| Ok(SubmissionResult::success(format!("{p} login flow initiated."))));
        let mut app = app_at("/login", backend);

        // Tab to the buttons row, select the Google button
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.is_loading());

        settle(&mut app).await;
        assert_eq!(app.state.current_view, View::Login);
        assert!(app.state.banner.is_none());
    }

    #[tokio::test]
    async fn test_registration_success_lands_on_login_with_marker() {
        let mut backend = MockAuthBackend::new();
        backend
            .expect_register()
            .times(1)
            .returning(|_| Ok(SubmissionResult::success("Registration successful! Please log in.")));
        let mut app = app_at("/registration", backend);

        type_str(&mut app, "Jane Doe");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "jane@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Login);
        let banner = app.state.banner.as_ref().expect("success marker");
        assert_eq!(banner.kind, BannerKind::Info);
    }

    #[tokio::test]
    async fn test_password_mismatch_blocks_registration() {
        let mut app = app_at("/registration", MockAuthBackend::new());

        type_str(&mut app, "Jane Doe");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "jane@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "different!");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(!app.is_loading());
        if let FormState::Registration(form) = &app.state.form {
            assert!(form.password.error.is_none());
            assert_eq!(
                form.confirm_password.error.as_deref(),
                Some("Passwords do not match.")
            );
        } else {
            panic!("expected registration form");
        }
    }

    #[tokio::test]
    async fn test_forgot_password_success_clears_email() {
        let mut backend = MockAuthBackend::new();
        backend.expect_request_password_reset().times(1).returning(|_| {
            Ok(SubmissionResult::success(
                "If an account with that email exists, a password reset link has been sent.",
            ))
        });
        let mut app = app_at("/forgot-password", backend);

        type_str(&mut app, "user@example.com");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        settle(&mut app).await;

        let banner = app.state.banner.as_ref().expect("success banner");
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.title, "Check Your Email");
        if let FormState::ForgotPassword(form) = &app.state.form {
            assert_eq!(form.email.as_text(), "");
        } else {
            panic!("expected forgot-password form");
        }
    }

    #[tokio::test]
    async fn test_reset_without_token_fails_on_mount_and_disables_submit() {
        // No backend expectation: submit must never dispatch
        let mut app = app_at("/reset-password/", MockAuthBackend::new());

        let banner = app.state.banner.as_ref().expect("missing-token banner");
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.text.contains("missing reset token"));

        // Even well-formed input cannot be submitted
        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(!app.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_success_redirects_to_login_after_delay() {
        let mut backend = MockAuthBackend::new();
        backend.expect_reset_password().times(1).returning(|req| {
            assert_eq!(req.token.as_deref(), Some("tok123"));
            Ok(SubmissionResult::success("Your password has been successfully reset."))
        });
        let mut app = app_at("/reset-password/tok123", backend);

        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "longenough");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::ResetPassword);
        let banner = app.state.banner.as_ref().expect("success banner");
        assert_eq!(banner.kind, BannerKind::Success);

        // Not yet: the redirect waits out its delay
        advance(Duration::from_millis(2999)).await;
        app.tick().await.unwrap();
        assert_eq!(app.state.current_view, View::ResetPassword);

        advance(Duration::from_millis(2)).await;
        app.tick().await.unwrap();
        assert_eq!(app.state.current_view, View::Login);
    }

    #[tokio::test]
    async fn test_remember_me_stores_email() {
        let mut backend = MockAuthBackend::new();
        backend
            .expect_login()
            .times(1)
            .returning(|_| Ok(SubmissionResult::success("Logged in.")));
        let mut app = app_at("/login", backend);

        fill_login(&mut app, "user@example.com", "password");
        // Move to the remember-me flag and toggle it
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        settle(&mut app).await;

        assert_eq!(
            app.config.remembered_email.as_deref(),
            Some("user@example.com")
        );
    }

    #[tokio::test]
    async fn test_navigation_shortcuts() {
        let mut app = app_at("/login", MockAuthBackend::new());

        app.handle_key(ctrl('f')).unwrap();
        assert_eq!(app.state.current_view, View::ForgotPassword);
        app.handle_key(ctrl('l')).unwrap();
        assert_eq!(app.state.current_view, View::Login);
        app.handle_key(ctrl('n')).unwrap();
        assert_eq!(app.state.current_view, View::Registration);
    }

    #[tokio::test]
    async fn test_navigation_discards_form_state() {
        let mut app = app_at("/login", MockAuthBackend::new());
        type_str(&mut app, "half-typed");
        app.handle_key(ctrl('f')).unwrap();
        app.handle_key(ctrl('l')).unwrap();
        if let FormState::Login(form) = &app.state.form {
            assert_eq!(form.email.as_text(), "");
        } else {
            panic!("expected login form");
        }
    }

    #[tokio::test]
    async fn test_reveal_toggle_on_secret_field() {
        let mut app = app_at("/login", MockAuthBackend::new());
        app.handle_key(key(KeyCode::Tab)).unwrap(); // password field
        type_str(&mut app, "secret");
        app.handle_key(ctrl('r')).unwrap();
        if let FormState::Login(form) = &app.state.form {
            assert!(form.password.revealed);
        } else {
            panic!("expected login form");
        }
    }

    #[tokio::test]
    async fn test_not_found_and_home_navigation() {
        let mut app = app_at("/no-such-page", MockAuthBackend::new());
        assert_eq!(app.state.current_view, View::NotFound);
        app.handle_key(key(KeyCode::Char('h'))).unwrap();
        assert_eq!(app.state.current_view, View::Home);
        app.handle_key(key(KeyCode::Char('l'))).unwrap();
        assert_eq!(app.state.current_view, View::Login);
    }

    #[tokio::test]
    async fn test_backend_error_becomes_banner() {
        let mut backend = MockAuthBackend::new();
        backend
            .expect_login()
            .times(1)
            .returning(|_| Err(AuthError::Unreachable("connection refused".to_string())));
        let mut app = app_at("/login", backend);

        fill_login(&mut app, "user@example.com", "password");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        settle(&mut app).await;

        let banner = app.state.banner.as_ref().expect("error banner");
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.text.contains("unreachable"));
        assert_eq!(app.state.current_view, View::Login);
    }
}
