use crate::domain::{AppEvent, Key};
use crate::ui::layout::tab_at;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Convert a terminal event into an application event.
///
/// `tab_bar` is the screen area of the tab bar from the last frame, used to
/// resolve clicks to tab names. Events with no meaning return `None`.
pub fn translate(event: &Event, tab_bar: Rect) -> Option<AppEvent> {
    match event {
        Event::Key(key) => translate_key(key).map(AppEvent::Key),
        Event::Mouse(mouse) => translate_mouse(mouse, tab_bar),
        _ => None,
    }
}

/// Map a key press to a backend-independent key
pub fn translate_key(key: &KeyEvent) -> Option<Key> {
    // Only process key press events (ignore release and repeat)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => Some(Key::Ctrl(c.to_ascii_lowercase())),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        // Ctrl+Left/Right behave like plain arrows
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, tab_bar: Rect) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => tab_at(tab_bar, mouse.column, mouse.row)
            .map(|tab| AppEvent::Click(tab.title().to_string())),
        _ => None,
    }
}
