use crate::domain::Tab;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Separator drawn between tab titles
pub const TAB_DIVIDER: &str = "│";

/// Main layout structure
pub struct MainLayout {
    pub tabs_area: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top: tab bar (3 rows, bordered)
/// - Middle: list of the active tab
/// - Bottom: keybindings footer (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // List
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        list_area: chunks[1],
        keybindings_area: chunks[2],
    }
}

/// Create centered modal area (for the add dialog)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Padded tab label as drawn in the tab bar
pub fn tab_label(tab: Tab) -> String {
    format!(" {} ", tab.title())
}

/// Horizontal span `[start, end)` of each tab label inside a bordered tab bar
pub fn tab_bar_offsets(tabs_area: Rect) -> Vec<(u16, u16)> {
    let divider_width = TAB_DIVIDER.chars().count() as u16;
    // Skip the left border
    let mut x = tabs_area.x.saturating_add(1);

    Tab::all()
        .iter()
        .map(|tab| {
            let width = tab_label(*tab).chars().count() as u16;
            let span = (x, x.saturating_add(width));
            x = span.1.saturating_add(divider_width);
            span
        })
        .collect()
}

/// Which tab title, if any, sits at a screen position
pub fn tab_at(tabs_area: Rect, column: u16, row: u16) -> Option<Tab> {
    let bottom = tabs_area.y.saturating_add(tabs_area.height);
    if row < tabs_area.y || row >= bottom {
        return None;
    }

    let right_border = tabs_area.x.saturating_add(tabs_area.width).saturating_sub(1);
    tab_bar_offsets(tabs_area)
        .iter()
        .position(|&(start, end)| column >= start && column < end && column < right_border)
        .and_then(Tab::from_index)
}
