//! Inline page-level banner (success/error/info)

use crate::state::{Banner, BannerKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a banner occupies for the given card width
pub fn banner_height(banner: &Banner, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let text_rows = banner.text.chars().count().div_ceil(inner).max(1) as u16;
    text_rows + 2 // borders
}

/// Draw a banner above the form
pub fn draw_banner(frame: &mut Frame, area: Rect, banner: &Banner) {
    let color = match banner.kind {
        BannerKind::Success => Color::Green,
        BannerKind::Error => Color::Red,
        BannerKind::Info => Color::Blue,
    };

    let block = Block::default()
        .title(format!(" {} ", banner.title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(banner.text.clone())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_height_grows_with_text() {
        let short = Banner::info("T", "short");
        let long = Banner::info("T", "x".repeat(200));
        assert_eq!(banner_height(&short, 56), 3);
        assert!(banner_height(&long, 56) > banner_height(&short, 56));
    }

    #[test]
    fn test_banner_height_survives_tiny_width() {
        let banner = Banner::error("T", "text");
        assert!(banner_height(&banner, 0) >= 3);
    }
}
