use crate::app::AppState;
use crate::domain::search::filter;
use crate::domain::{Assignment, Note, ReadingMaterial, Tab, Timer};
use crate::ui::styles::{
    author_style, border_style, default_style, done_style, hint_style, selected_style,
    timer_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn assignment_line(item: &Assignment) -> Line<'static> {
    Line::from(vec![Span::raw("• "), Span::raw(item.0.clone())])
}

fn note_line(item: &Note) -> Line<'static> {
    Line::from(vec![Span::raw("✎ "), Span::raw(item.0.clone())])
}

/// Format: [x] Macbeth - Shakespeare
fn reading_line(item: &ReadingMaterial) -> Line<'static> {
    let (mark, mark_style) = if item.read {
        ("[x] ", done_style())
    } else {
        ("[ ] ", default_style())
    };

    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(item.title.clone()),
        Span::raw(" - "),
        Span::styled(item.author.clone(), author_style()),
    ])
}

/// Format: Write Essay  1h29m59s
fn timer_line(item: &Timer) -> Line<'static> {
    let countdown_style = if item.is_finished() {
        done_style()
    } else {
        timer_style()
    };

    Line::from(vec![
        Span::raw(item.description.clone()),
        Span::raw("  "),
        Span::styled(item.remaining_formatted(), countdown_style),
    ])
}

/// Lines for the active tab, paired with the item index they show
fn visible_lines(app: &AppState) -> Vec<(usize, Line<'static>)> {
    let query = app.search.query.as_str();
    let store = &app.store;

    let lines: Vec<Line<'static>> = match app.active_tab {
        Tab::Assignments => filter(store.assignments.items(), query)
            .into_iter()
            .map(assignment_line)
            .collect(),
        Tab::ReadingMaterials => filter(store.reading_materials.items(), query)
            .into_iter()
            .map(reading_line)
            .collect(),
        Tab::Notes => filter(store.notes.items(), query)
            .into_iter()
            .map(note_line)
            .collect(),
        Tab::Timers => filter(store.timers.items(), query)
            .into_iter()
            .map(timer_line)
            .collect(),
    };

    app.visible_indices().into_iter().zip(lines).collect()
}

/// Render the list of the active tab
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let selected = app.visible_selection();
    let lines = visible_lines(app);

    let mut items: Vec<ListItem> = Vec::new();

    if app.search.is_active() || app.search.editing {
        let cursor = if app.search.editing { "█" } else { "" };
        items.push(ListItem::new(Line::from(vec![
            Span::styled("Search results for '", hint_style()),
            Span::styled(format!("{}{}", app.search.query, cursor), title_style()),
            Span::styled("':", hint_style()),
        ])));
    }

    if lines.is_empty() {
        let hint = if app.search.is_active() {
            "No matches."
        } else {
            "Nothing here yet. Press 'a' to add."
        };
        items.push(ListItem::new(Line::styled(hint, hint_style())));
    }

    items.extend(lines.into_iter().map(|(idx, line)| {
        let style = if Some(idx) == selected {
            selected_style()
        } else {
            default_style()
        };
        ListItem::new(line).style(style)
    }));

    let total = app.store.list(app.active_tab).len();
    let title = format!(" {} ({}) ", app.active_tab.title(), total);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
