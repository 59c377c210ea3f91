use crate::app::AppState;
use crate::domain::Tab;
use crate::ui::layout::{tab_label, TAB_DIVIDER};
use crate::ui::styles::{active_tab_style, border_style, inactive_tab_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the tab bar line. Widths must stay in sync with `layout::tab_bar_offsets`.
fn tab_line(active: Tab) -> Line<'static> {
    let mut spans = Vec::new();

    for (idx, tab) in Tab::all().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(TAB_DIVIDER, border_style()));
        }
        let style = if *tab == active {
            active_tab_style()
        } else {
            inactive_tab_style()
        };
        spans.push(Span::styled(tab_label(*tab), style));
    }

    Line::from(spans)
}

/// Render the tab bar
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(tab_line(app.active_tab)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" English Class Desk ", title_style())),
    );

    f.render_widget(paragraph, area);
}
