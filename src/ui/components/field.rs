//! Field rendering for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered input box plus one row for the field error
pub const FIELD_HEIGHT: u16 = 4;
/// Flag fields render as a single line with no error row
pub const FLAG_FIELD_HEIGHT: u16 = 1;

/// Draw a form field: bordered input with label title, placeholder when
/// empty, a cursor when active, and its error message underneath.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    if field.is_flag() {
        draw_flag(frame, area, field, is_active);
        return;
    }

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = if display_value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(Paragraph::new(content).block(block), input_area);

    if let Some(error) = &field.error {
        if area.height >= FIELD_HEIGHT {
            let error_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
                error_area,
            );
        }
    }
}

fn draw_flag(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let line = Line::from(Span::styled(
        format!("{} {}", field.display_value(), field.label),
        style,
    ));
    frame.render_widget(Paragraph::new(line), area);
}
