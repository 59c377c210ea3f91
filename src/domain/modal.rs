use super::enums::Tab;
use super::error::InputError;
use super::store::NewItem;

/// Add-item dialog state. `None` on the app means the dialog is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    /// Tab the new item will be added to
    pub tab: Tab,
    pub prompt: &'static str,
    pub buffer: String,
    /// Message from the last failed commit
    pub error: Option<String>,
}

impl ModalState {
    pub fn open_for(tab: Tab) -> Self {
        Self {
            tab,
            prompt: tab.add_prompt(),
            buffer: String::new(),
            error: None,
        }
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Parse the buffer into an item for this dialog's tab.
    ///
    /// The previous error is cleared first; on failure the new one is
    /// recorded and the buffer is left untouched.
    pub fn commit(&mut self) -> Result<NewItem, InputError> {
        self.error = None;
        let result = parse_for(self.tab, &self.buffer);
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }
}

/// Parse input text with the rule belonging to `tab`
pub fn parse_for(tab: Tab, input: &str) -> Result<NewItem, InputError> {
    Ok(match tab {
        Tab::Assignments => NewItem::Assignment(input.parse()?),
        Tab::ReadingMaterials => NewItem::ReadingMaterial(input.parse()?),
        Tab::Notes => NewItem::Note(input.parse()?),
        Tab::Timers => NewItem::Timer(input.parse()?),
    })
}

/// Search input state for the active tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Keystrokes go to the query while true
    pub editing: bool,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.editing = false;
    }
}
