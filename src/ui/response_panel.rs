//! Response panel: pretty-printed dump of the last server response

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the response dump
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = match &app.state.response_received_at {
        Some(at) => format!(" Response ({}) ", at.format("%H:%M:%S")),
        None => " Response ".to_string(),
    };

    let dump = app.state.response_dump();
    let lines: Vec<Line> = dump.lines().map(|l| Line::from(l.to_string())).collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
