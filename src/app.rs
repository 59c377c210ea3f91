use crate::domain::{AppEvent, ItemStore, Key, ModalState, SearchState, Tab, UiMode};
use chrono::Duration;
use log::{debug, info};

/// Main application state
///
/// State only changes through [`AppState::update`], which consumes the
/// current state together with one event and returns the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub store: ItemStore,
    pub active_tab: Tab,
    /// Open add-item dialog, if any
    pub modal: Option<ModalState>,
    pub search: SearchState,
    /// How much a single tick takes off every timer
    pub tick_unit: Duration,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: ItemStore, tick_unit: Duration) -> Self {
        Self {
            store,
            active_tab: Tab::default(),
            modal: None,
            search: SearchState::default(),
            tick_unit,
            should_quit: false,
        }
    }

    /// Start on a specific tab
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.modal.is_some() {
            UiMode::AddingItem
        } else if self.search.editing {
            UiMode::Searching
        } else {
            UiMode::Normal
        }
    }

    /// Indices of the active tab's items that pass the current search
    pub fn visible_indices(&self) -> Vec<usize> {
        self.store
            .list(self.active_tab)
            .visible_indices(&self.search.query)
    }

    /// The active tab's cursor, if the item under it is currently visible
    pub fn visible_selection(&self) -> Option<usize> {
        let cursor = self.store.list(self.active_tab).cursor()?;
        if !self.search.is_active() || self.visible_indices().contains(&cursor) {
            Some(cursor)
        } else {
            None
        }
    }

    /// Apply one event and return the resulting state
    pub fn update(self, event: AppEvent) -> Self {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Click(target) => self.on_click(&target),
            AppEvent::Tick => self.on_tick(),
        }
    }

    fn on_key(mut self, key: Key) -> Self {
        debug!("Key {:?} in {:?} on {:?}", key, self.ui_mode(), self.active_tab);

        if self.modal.is_some() {
            self.handle_modal_key(key);
        } else if self.search.editing {
            self.handle_search_key(key);
        } else if !self.handle_tab_key(key) {
            self.handle_global_key(key);
        }
        self
    }

    fn on_click(mut self, target: &str) -> Self {
        // The dialog is blocking: nothing behind it reacts to the pointer
        if self.modal.is_some() {
            return self;
        }
        match Tab::from_name(target) {
            Some(tab) => self.set_tab(tab),
            None => debug!("Ignoring click on unknown target {:?}", target),
        }
        self
    }

    fn on_tick(mut self) -> Self {
        self.store.tick_timers(self.tick_unit);
        self
    }

    /// Keys while the add dialog is open
    fn handle_modal_key(&mut self, key: Key) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        match key {
            Key::Char(c) => modal.push(c),
            Key::Backspace => modal.backspace(),
            Key::Esc => {
                self.modal = None;
            }
            Key::Enter => match modal.commit() {
                Ok(item) => {
                    info!("Added {:?} to {:?}", item, modal.tab);
                    self.store.insert(item);
                    self.modal = None;
                }
                Err(e) => debug!("Rejected input {:?}: {}", modal.buffer, e),
            },
            _ => {}
        }
    }

    /// Keys while typing a search query
    fn handle_search_key(&mut self, key: Key) {
        match key {
            Key::Char(c) => {
                self.search.query.push(c);
                self.snap_cursor_to_results();
            }
            Key::Backspace => {
                self.search.query.pop();
                self.snap_cursor_to_results();
            }
            Key::Enter => self.search.editing = false,
            Key::Esc => self.search.clear(),
            _ => {}
        }
    }

    /// Keys specific to the active tab. Returns true when the key was used.
    fn handle_tab_key(&mut self, key: Key) -> bool {
        match key {
            Key::Up => {
                self.move_selection(false);
                true
            }
            Key::Down => {
                self.move_selection(true);
                true
            }
            Key::Char('a') => {
                self.modal = Some(ModalState::open_for(self.active_tab));
                true
            }
            Key::Char('d') => {
                self.delete_selected();
                true
            }
            Key::Char('/') => {
                self.search.editing = true;
                true
            }
            Key::Esc if self.search.is_active() => {
                self.search.clear();
                true
            }
            Key::Char('r') if self.active_tab == Tab::ReadingMaterials => {
                self.toggle_read_selected();
                true
            }
            _ => false,
        }
    }

    /// Keys that work the same on every tab
    fn handle_global_key(&mut self, key: Key) {
        match key {
            Key::Left => self.set_tab(self.active_tab.left()),
            Key::Right => self.set_tab(self.active_tab.right()),
            Key::Char('q') | Key::Ctrl('q') | Key::Ctrl('c') => {
                info!("Quit requested");
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn set_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            self.active_tab = tab;
            self.search.clear();
        }
    }

    fn move_selection(&mut self, down: bool) {
        let query = self.search.query.clone();
        let list = self.store.list_mut(self.active_tab);

        if query.is_empty() {
            if down {
                list.move_down();
            } else {
                list.move_up();
            }
        } else {
            let visible = list.visible_indices(&query);
            if down {
                list.move_down_within(&visible);
            } else {
                list.move_up_within(&visible);
            }
        }
    }

    fn snap_cursor_to_results(&mut self) {
        let visible = self.visible_indices();
        self.store.list_mut(self.active_tab).snap_into(&visible);
    }

    /// Delete the selected item of the active tab, if it is visible
    fn delete_selected(&mut self) {
        if self.visible_selection().is_none() {
            return;
        }
        if self.store.list_mut(self.active_tab).remove_selected() {
            info!("Deleted selected item from {:?}", self.active_tab);
            if self.search.is_active() {
                self.snap_cursor_to_results();
            }
        }
    }

    fn toggle_read_selected(&mut self) {
        if self.visible_selection().is_none() {
            return;
        }
        if let Some(material) = self.store.reading_materials.selected_mut() {
            material.toggle_read();
            debug!("Marked {:?} read={}", material.title, material.read);
        }
    }
}
