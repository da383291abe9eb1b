//! Form domain layer
//!
//! Type-safe form handling for the authentication flows: field value
//! objects, declarative validation rules, and one form struct per flow.

mod field;
mod form_state;
mod validation;

pub use field::{FieldValue, FormField};
pub use form_state::{
    Form, FormState, ForgotPasswordForm, LoginForm, RegistrationForm, ResetPasswordForm,
};
pub use validation::{is_valid_email, Constraint};
