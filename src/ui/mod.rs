//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod response_panel;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, response_area) = layout::create_layout(area);

    forms::draw_signup_form(frame, form_area, app);
    response_panel::draw(frame, response_area, app);

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldInput, FieldName};
    use crate::submit::MockSubmitter;
    use crate::validation::{EMAIL_INVALID, TOS_REQUIRED};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        let mut mock = MockSubmitter::new();
        mock.expect_post().never();
        App::new(Arc::new(mock), "http://test.local/api/users")
    }

    /// Render the app and return the screen as one string per row
    fn render(app: &App) -> Vec<String> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(screen: &[String], needle: &str) -> bool {
        screen.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_renders_labels_and_empty_response() {
        let app = test_app();
        let screen = render(&app);
        for label in ["Name", "Email", "Password", "Terms of Service", "Submit", "Response"] {
            assert!(screen_contains(&screen, label), "missing {label}");
        }
        assert!(screen_contains(&screen, "[ ]"));
        assert!(screen_contains(&screen, "[]"));
        assert!(screen_contains(&screen, "http://test.local/api/users"));
    }

    #[test]
    fn test_errors_render_only_when_present() {
        let mut app = test_app();
        let screen = render(&app);
        assert!(!screen_contains(&screen, EMAIL_INVALID));

        app.on_field_change(FieldName::Email, FieldInput::from("nope"))
            .unwrap();
        app.on_field_change(FieldName::Tos, FieldInput::Checked(false))
            .unwrap();
        let screen = render(&app);
        assert!(screen_contains(&screen, EMAIL_INVALID));
        assert!(screen_contains(&screen, TOS_REQUIRED));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = test_app();
        app.on_field_change(FieldName::Password, FieldInput::from("hunter22"))
            .unwrap();
        let screen = render(&app);
        assert!(!screen_contains(&screen, "hunter22"));
        assert!(screen_contains(&screen, "••••••••"));
    }

    #[test]
    fn test_checked_tos_renders_mark() {
        let mut app = test_app();
        app.on_field_change(FieldName::Tos, FieldInput::Checked(true))
            .unwrap();
        let screen = render(&app);
        assert!(screen_contains(&screen, "[x]"));
    }

    #[test]
    fn test_response_dump_is_rendered() {
        let mut app = test_app();
        app.state.response = serde_json::json!({"id": "42"});
        let screen = render(&app);
        assert!(screen_contains(&screen, "\"id\": \"42\""));
    }
}
