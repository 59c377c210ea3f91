pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod tabs;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use tabs::render_tabs;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_tabs(f, app, layout.tabs_area);
    render_list_pane(f, app, layout.list_area);
    render_keybindings(f, layout.keybindings_area);

    // Render input form if active
    if app.modal.is_some() {
        render_input_form(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppEvent, ItemStore, Key};
    use chrono::Duration;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_seeded_assignments() {
        let app = AppState::new(ItemStore::seeded(), Duration::seconds(1));
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Assignments"));
        assert!(text.contains("Essay on Shakespeare"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_render_modal_with_error() {
        let app = AppState::new(ItemStore::seeded(), Duration::seconds(1))
            .update(AppEvent::Key(Key::Right))
            .update(AppEvent::Key(Key::Char('a')))
            .update(AppEvent::Key(Key::Char('x')))
            .update(AppEvent::Key(Key::Enter));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Add to Reading"));
        assert!(text.contains("Invalid format. Use 'Title - Author'"));
    }
}
