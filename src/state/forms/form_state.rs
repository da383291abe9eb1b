//! Form state management and per-flow form structs

use super::field::FormField;
use super::validation::Constraint;
use crate::auth::{Credentials, RegistrationRequest, ResetRequest};

/// Error attached to the confirmation field when passwords differ
const MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Trait for common form operations
///
/// Every form exposes its input fields followed by a trailing buttons row
/// at index `field_count() - 1`.
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    /// Labels for the trailing buttons row
    fn buttons(&self) -> &'static [&'static str];
    fn selected_button(&self) -> usize;
    fn set_selected_button(&mut self, index: usize);
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }
    fn next_button(&mut self) {
        let count = self.buttons().len();
        self.set_selected_button((self.selected_button() + 1) % count);
    }
    fn prev_button(&mut self) {
        let count = self.buttons().len();
        let current = self.selected_button();
        self.set_selected_button(if current == 0 { count - 1 } else { current - 1 });
    }
    /// Run all field rules (and any cross-field rules), attaching error
    /// messages to the offending fields. Returns true when submission
    /// may proceed.
    fn validate(&mut self) -> bool;
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Login(LoginForm),
    Registration(RegistrationForm),
    ForgotPassword(ForgotPasswordForm),
    ResetPassword(ResetPasswordForm),
}

impl FormState {
    fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::Login(f) => Some(f),
            FormState::Registration(f) => Some(f),
            FormState::ForgotPassword(f) => Some(f),
            FormState::ResetPassword(f) => Some(f),
        }
    }

    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::Login(f) => Some(f),
            FormState::Registration(f) => Some(f),
            FormState::ForgotPassword(f) => Some(f),
            FormState::ResetPassword(f) => Some(f),
        }
    }

    pub fn next_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.prev_field();
        }
    }

    pub fn next_button(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.next_button();
        }
    }

    pub fn prev_button(&mut self) {
        if let Some(form) = self.as_form_mut() {
            form.prev_button();
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.as_form_mut().and_then(|f| f.get_active_field_mut())
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.as_form().is_some_and(|f| f.is_buttons_row_active())
    }
}

// Login form: email, password, remember-me, buttons row
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub remember_me: FormField,
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Log In, 1=Google, 2=GitHub)
    pub selected_button: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::with_email(String::new())
    }

    /// Prefill the email field (remembered from a previous session)
    pub fn with_email(email: String) -> Self {
        Self {
            email: FormField::text_with_value(
                "email",
                "Email Address",
                "you@example.com",
                email,
                vec![Constraint::Email],
            ),
            password: FormField::secret("password", "Password", vec![Constraint::MinLength(6)]),
            remember_me: FormField::flag("remember_me", "Remember me"),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Validated field values for the submission step
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            remember_me: self.remember_me.as_flag(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        4 // email, password, remember_me, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            2 => Some(&mut self.remember_me),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            2 => Some(&self.remember_me),
            _ => None,
        }
    }
    fn buttons(&self) -> &'static [&'static str] {
        &["Log In", "Google", "GitHub"]
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(2);
    }
    fn validate(&mut self) -> bool {
        let email_ok = self.email.validate();
        let password_ok = self.password.validate();
        email_ok && password_ok
    }
}

// Registration form: full name, email, password, confirmation, buttons row
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub full_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub active_field_index: usize,
    /// 0=Create Account, 1=Google, 2=GitHub
    pub selected_button: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text(
                "full_name",
                "Full name",
                "John Doe",
                vec![Constraint::MinLength(2)],
            ),
            email: FormField::text(
                "email",
                "Email Address",
                "you@example.com",
                vec![Constraint::Email],
            ),
            password: FormField::secret("password", "Password", vec![Constraint::MinLength(8)]),
            confirm_password: FormField::secret("confirm_password", "Confirm Password", vec![]),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Validated field values for the submission step
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            3 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn buttons(&self) -> &'static [&'static str] {
        &["Create Account", "Google", "GitHub"]
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(2);
    }
    fn validate(&mut self) -> bool {
        let name_ok = self.full_name.validate();
        let email_ok = self.email.validate();
        let password_ok = self.password.validate();
        let mut confirm_ok = self.confirm_password.validate();
        // Equality is only checked once the password itself is acceptable;
        // the error lands on the confirmation field.
        if password_ok && confirm_ok && self.password.as_text() != self.confirm_password.as_text() {
            self.confirm_password.error = Some(MISMATCH_MESSAGE.to_string());
            confirm_ok = false;
        }
        name_ok && email_ok && password_ok && confirm_ok
    }
}

// Forgot-password form: email, buttons row
#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text(
                "email",
                "Email Address",
                "you@example.com",
                vec![Constraint::Email],
            ),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_text()
    }
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ForgotPasswordForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
    fn buttons(&self) -> &'static [&'static str] {
        &["Send Reset Link"]
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(0);
    }
    fn validate(&mut self) -> bool {
        self.email.validate()
    }
}

// Reset-password form: new password, confirmation, buttons row.
// Carries the token extracted from the route; without it the submit
// button stays disabled for the lifetime of the view.
#[derive(Debug, Clone)]
pub struct ResetPasswordForm {
    pub new_password: FormField,
    pub confirm_password: FormField,
    pub token: Option<String>,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl ResetPasswordForm {
    pub fn new(token: Option<String>) -> Self {
        Self {
            new_password: FormField::secret(
                "new_password",
                "New Password",
                vec![Constraint::MinLength(8)],
            ),
            confirm_password: FormField::secret(
                "confirm_password",
                "Confirm New Password",
                vec![],
            ),
            token,
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Validated field values for the submission step
    pub fn request(&self) -> ResetRequest {
        ResetRequest {
            token: self.token.clone(),
            new_password: self.new_password.as_text().to_string(),
        }
    }
}

impl Form for ResetPasswordForm {
    fn field_count(&self) -> usize {
        3
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.new_password),
            1 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.new_password),
            1 => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn buttons(&self) -> &'static [&'static str] {
        &["Reset Password"]
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn set_selected_button(&mut self, index: usize) {
        self.selected_button = index.min(0);
    }
    fn validate(&mut self) -> bool {
        let password_ok = self.new_password.validate();
        let mut confirm_ok = self.confirm_password.validate();
        if password_ok
            && confirm_ok
            && self.new_password.as_text() != self.confirm_password.as_text()
        {
            self.confirm_password.error = Some(MISMATCH_MESSAGE.to_string());
            confirm_ok = false;
        }
        password_ok && confirm_ok
    }
}
