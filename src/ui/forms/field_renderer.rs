//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Character echoed in place of each masked character
const MASK_CHAR: char = '•';

/// Text as it should appear in the input, masked if requested
fn display_text(value: &str, is_masked: bool) -> String {
    if is_masked {
        value.chars().map(|_| MASK_CHAR).collect()
    } else {
        value.to_string()
    }
}

/// Draw a single-line text input with a bordered label
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_masked: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = display_text(value, is_masked);
    let display_value = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw a one-line checkbox: `[x] Label`
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(label.to_string(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw an inline error message; nothing is drawn for an empty message
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
