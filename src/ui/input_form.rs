use crate::app::AppState;
use crate::domain::ModalState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_hint_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn form_lines(modal: &ModalState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::raw(modal.prompt));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(modal.buffer.clone(), modal_title_style()),
        Span::styled("█", modal_title_style()), // Cursor
    ]));
    lines.push(Line::raw(""));

    match &modal.error {
        Some(message) => lines.push(Line::styled(message.clone(), error_style())),
        None => lines.push(Line::raw("")),
    }

    lines.push(Line::styled("Enter to add  ·  Esc to cancel", modal_hint_style()));
    lines
}

/// Render the add-item dialog over the current view
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(modal) = &app.modal {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title = format!(" Add to {} ", modal.tab.title());
        let paragraph = Paragraph::new(form_lines(modal))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
