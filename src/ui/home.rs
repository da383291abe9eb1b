//! Placeholder homepage shown after a successful (simulated) login

use super::layout;
use crate::app::App;
use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let content = layout::draw_card(
        frame,
        app,
        "Welcome!",
        "You are successfully logged in (simulated).",
        2,
    );

    frame.render_widget(
        Paragraph::new("Press l to go back to the login page (simulated logout).")
            .style(Style::default().fg(Color::Gray)),
        content,
    );
}
