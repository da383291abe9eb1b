//! UI module for rendering the TUI

mod components;
mod forgot_password;
mod home;
mod layout;
mod login;
mod not_found;
mod registration;
mod reset_password;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    match &app.state.current_view {
        View::Home => home::draw(frame, app),
        View::Login => login::draw(frame, app),
        View::Registration => registration::draw(frame, app),
        View::ForgotPassword => forgot_password::draw(frame, app),
        View::ResetPassword => reset_password::draw(frame, app),
        View::NotFound => not_found::draw(frame, app),
    }

    // Status bar
    layout::draw_status_bar(frame, app);
}
