//! Login view

use super::components::{
    banner_height, draw_banner, draw_field, render_button, render_social_button, BUTTON_HEIGHT,
    FIELD_HEIGHT, FLAG_FIELD_HEIGHT,
};
use super::layout::{self, CARD_WIDTH};
use crate::app::App;
use crate::auth::{PROVIDER_GITHUB, PROVIDER_GOOGLE};
use crate::state::{Form, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let FormState::Login(form) = &app.state.form else {
        return;
    };

    let banner_rows = app
        .state
        .banner
        .as_ref()
        .map(|b| banner_height(b, CARD_WIDTH - 4) + 1)
        .unwrap_or(0);
    let content_height =
        banner_rows + 2 * FIELD_HEIGHT + FLAG_FIELD_HEIGHT + 1 + BUTTON_HEIGHT + 2;

    let content = layout::draw_card(
        frame,
        app,
        "Welcome Back!",
        "Log in to access your account and continue your journey.",
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
        Constraint::Length(FLAG_FIELD_HEIGHT),
        Constraint::Length(1),
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
    draw_field(frame, chunks[offset], &form.email, active == 0);
    draw_field(frame, chunks[offset + 1], &form.password, active == 1);
    draw_field(frame, chunks[offset + 2], &form.remember_me, active == 2);

    draw_buttons(frame, chunks[offset + 4], app, form);

    let links = Paragraph::new("^F forgot password   ^N create an account")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(links, chunks[offset + 5]);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, form: &crate::state::LoginForm) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Min(20),
            Constraint::Length(1),
            Constraint::Min(20),
        ])
        .split(area);

    let on_buttons = form.is_buttons_row_active();
    let loading = app.is_loading();
    let busy = app
        .loading_elapsed()
        .map(layout::spinner_frame)
        .unwrap_or("");

    let primary = if loading {
        format!("{busy} …")
    } else {
        "Log In".to_string()
    };
    render_button(
        frame,
        row[0],
        &primary,
        on_buttons && form.selected_button == 0,
        !loading,
    );
    render_social_button(
        frame,
        row[2],
        PROVIDER_GOOGLE,
        on_buttons && form.selected_button == 1,
        loading,
        busy,
    );
    render_social_button(
        frame,
        row[4],
        PROVIDER_GITHUB,
        on_buttons && form.selected_button == 2,
        loading,
        busy,
    );
}
