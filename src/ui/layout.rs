//! Shared page chrome: branding header, centered card, footer, status bar

use crate::app::App;
use crate::state::View;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Default branding shown above the card (config can override it)
pub const DEFAULT_APP_TITLE: &str = "Ascendion Suite";

/// Width of the centered card
pub const CARD_WIDTH: u16 = 60;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Busy-indicator frame for the given elapsed time
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / 80) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

fn app_title(app: &App) -> &str {
    app.config.app_title.as_deref().unwrap_or(DEFAULT_APP_TITLE)
}

/// Rows needed to wrap `text` at `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.chars().count().div_ceil(width).max(1) as u16
}

/// Draw the shared chrome (header, titled card with description, footer)
/// and return the content area inside the card.
pub fn draw_card(
    frame: &mut Frame,
    app: &App,
    title: &str,
    description: &str,
    content_height: u16,
) -> Rect {
    // Bottom row belongs to the status bar
    let area = frame.area();
    let area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };

    let card_width = CARD_WIDTH.min(area.width);
    let inner_width = card_width.saturating_sub(4);
    let description_rows = wrapped_rows(description, inner_width);
    // Borders, padded description, blank separator, then page content
    let card_height = content_height + description_rows + 3;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Branding header
            Constraint::Length(1),
            Constraint::Length(card_height),
            Constraint::Length(1),
            Constraint::Length(1), // Footer
            Constraint::Min(0),
        ])
        .split(area);

    let center = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(card_width),
                Constraint::Min(0),
            ])
            .split(row)[1]
    };

    let header = Paragraph::new(Line::from(Span::styled(
        app_title(app),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, vertical[1]);

    let card_area = center(vertical[3]);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let card_inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(description_rows),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(card_inner);

    let desc = Paragraph::new(description)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, card_chunks[0]);

    let footer = Paragraph::new(format!(
        "© {} {}. All rights reserved.",
        Utc::now().year(),
        app_title(app)
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, vertical[5]);

    card_chunks[2]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if let Some(elapsed) = app.loading_elapsed() {
        spans.push(Span::styled(
            format!(" {} Processing… ", spinner_frame(elapsed)),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("| "));
    } else {
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "l:log out".to_string(),
        View::Login => {
            "Tab:next  Enter:submit  Space:toggle  ^R:reveal  ^N:register  ^F:forgot".to_string()
        }
        View::Registration => "Tab:next  Enter:submit  ^R:reveal  ^L:log in".to_string(),
        View::ForgotPassword => "Tab:next  Enter:submit  ^L:log in".to_string(),
        View::ResetPassword => {
            "Tab:next  Enter:submit  ^R:reveal  ^F:new link  ^L:log in".to_string()
        }
        View::NotFound => "h:home".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles_through_frames() {
        let first = spinner_frame(Duration::from_millis(0));
        let second = spinner_frame(Duration::from_millis(80));
        assert_ne!(first, second);
        let wrapped = spinner_frame(Duration::from_millis(80 * SPINNER_FRAMES.len() as u64));
        assert_eq!(first, wrapped);
    }

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 40), 1);
        assert_eq!(wrapped_rows("short", 40), 1);
        assert_eq!(wrapped_rows(&"x".repeat(81), 40), 3);
    }
}
