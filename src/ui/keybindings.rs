use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←/→ tab   "),
        Span::raw("↑/↓ select   "),
        Span::raw("a add   "),
        Span::raw("d delete   "),
        Span::raw("r read (Reading)   "),
        Span::raw("/ search   "),
        Span::raw("Esc clear   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
