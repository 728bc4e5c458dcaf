//! Signup form rendering

use super::field_renderer::{draw_checkbox, draw_error, draw_field};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the signup form: inputs, inline errors and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(1),             // Terms of service
            Constraint::Length(1),             // Terms error
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let form = &app.state.form;
    let active = form.active_field_name();

    for (i, field) in [FieldName::Name, FieldName::Email, FieldName::Password]
        .into_iter()
        .enumerate()
    {
        draw_field(
            frame,
            chunks[i * 2],
            field.label(),
            form.values.text(field),
            active == Some(field),
            field.is_masked(),
        );
        draw_error(frame, chunks[i * 2 + 1], form.errors.get(field));
    }

    draw_checkbox(
        frame,
        chunks[6],
        FieldName::Tos.label(),
        form.values.tos,
        active == Some(FieldName::Tos),
    );
    draw_error(frame, chunks[7], form.errors.get(FieldName::Tos));

    let button_area = Rect {
        width: chunks[9].width.min(14),
        ..chunks[9]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_active(),
        app.submit_enabled(),
    );
}
