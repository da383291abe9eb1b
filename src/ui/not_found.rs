//! Catch-all view for unmatched routes

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
        "Page Not Found",
        "Oops! The page you are looking for does not exist.",
        2,
    );

    frame.render_widget(
        Paragraph::new("Press h to return to the homepage.")
            .style(Style::default().fg(Color::Gray)),
        content,
    );
}
