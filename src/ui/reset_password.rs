//! Reset-password view

use super::components::{
    banner_height, draw_banner, draw_field, render_button, BUTTON_HEIGHT, FIELD_HEIGHT,
};
use super::layout::{self, CARD_WIDTH};
use crate::app::App;
use crate::state::{Form, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let FormState::ResetPassword(form) = &app.state.form else {
        return;
    };

    let banner_rows = app
        .state
        .banner
        .as_ref()
        .map(|b| banner_height(b, CARD_WIDTH - 4) + 1)
        .unwrap_or(0);
    let content_height = banner_rows + 2 * FIELD_HEIGHT + BUTTON_HEIGHT + 2;

    let content = layout::draw_card(
        frame,
        app,
        "Set New Password",
        "Create a strong new password for your account. Make sure it's memorable and secure.",
        content_height,
    );

    let mut constraints = Vec::new();
    if banner_rows > 0 {
        constraints.push(Constraint::Length(banner_rows - 1));
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(content);

    let offset = if banner_rows > 0 {
        if let Some(banner) = &app.state.banner {
            draw_banner(frame, chunks[0], banner);
        }
        2
    } else {
        0
    };

    let active = form.active_field();
    draw_field(frame, chunks[offset], &form.new_password, active == 0);
    draw_field(frame, chunks[offset + 1], &form.confirm_password, active == 1);

    let loading = app.is_loading();
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(chunks[offset + 2])[0];
    let primary = if let Some(elapsed) = app.loading_elapsed() {
        format!("{} …", layout::spinner_frame(elapsed))
    } else {
        "Reset Password".to_string()
    };
    // Without a token the control stays disabled
    render_button(
        frame,
        button_area,
        &primary,
        form.is_buttons_row_active(),
        form.has_token() && !loading,
    );

    let links = if form.has_token() {
        "Remember your password? ^L to log in"
    } else {
        "Need to request a new link? ^F for forgot password"
    };
    frame.render_widget(
        Paragraph::new(links).style(Style::default().fg(Color::DarkGray)),
        chunks[offset + 3],
    );
}
