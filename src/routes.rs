//! Route path parsing
//!
//! The app is addressed by the same paths the web client used. The
//! initial route arrives as a process argument; unmatched paths land on
//! the not-found view.

use crate::state::View;

/// A parsed route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Registration,
    ForgotPassword,
    /// `/reset-password/:token` or `/reset-password/` (token missing)
    ResetPassword { token: Option<String> },
    NotFound,
}

impl Route {
    /// Parse a route path into a `Route`
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/registration" => Route::Registration,
            "/forgot-password" => Route::ForgotPassword,
            _ => {
                if let Some(rest) = path.strip_prefix("/reset-password/") {
                    if rest.is_empty() {
                        Route::ResetPassword { token: None }
                    } else if rest.contains('/') {
                        Route::NotFound
                    } else {
                        Route::ResetPassword {
                            token: Some(rest.to_string()),
                        }
                    }
                } else {
                    Route::NotFound
                }
            }
        }
    }

    /// The view this route renders
    pub fn view(&self) -> View {
        match self {
            Route::Home => View::Home,
            Route::Login => View::Login,
            Route::Registration => View::Registration,
            Route::ForgotPassword => View::ForgotPassword,
            Route::ResetPassword { .. } => View::ResetPassword,
            Route::NotFound => View::NotFound,
        }
    }

    /// The reset token carried by this route, if any
    pub fn reset_token(&self) -> Option<String> {
        match self {
            Route::ResetPassword { token } => token.clone(),
            _ => None,
        }
    }
}
