/// One of the four collections the user browses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Assignments,
    ReadingMaterials,
    Notes,
    Timers,
}

impl Tab {
    /// Index of the last tab
    pub const LAST: usize = 3;

    /// Get all tabs in display order
    pub fn all() -> &'static [Tab] {
        &[Tab::Assignments, Tab::ReadingMaterials, Tab::Notes, Tab::Timers]
    }

    /// Position of this tab in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Tab::Assignments => 0,
            Tab::ReadingMaterials => 1,
            Tab::Notes => 2,
            Tab::Timers => 3,
        }
    }

    /// Direct tab lookup, `None` when out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Get the display title shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Assignments => "Assignments",
            Tab::ReadingMaterials => "Reading",
            Tab::Notes => "Notes",
            Tab::Timers => "Timers",
        }
    }

    /// Parse a tab from its title or a common alias (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();

        match normalized.as_str() {
            "assignments" | "assignment" => Some(Tab::Assignments),
            "reading" | "readings" | "readingmaterials" | "readingmaterial" => {
                Some(Tab::ReadingMaterials)
            }
            "notes" | "note" => Some(Tab::Notes),
            "timers" | "timer" => Some(Tab::Timers),
            _ => None,
        }
    }

    /// Tab to the left, or `self` at the first tab
    pub fn left(&self) -> Self {
        match self.index() {
            0 => *self,
            i => Self::from_index(i - 1).unwrap_or(*self),
        }
    }

    /// Tab to the right, or `self` at the last tab
    pub fn right(&self) -> Self {
        if self.index() >= Self::LAST {
            *self
        } else {
            Self::from_index(self.index() + 1).unwrap_or(*self)
        }
    }

    /// Prompt shown when adding an item to this tab
    pub fn add_prompt(&self) -> &'static str {
        match self {
            Tab::Assignments => "Add new assignment:",
            Tab::ReadingMaterials => "Add new reading material (Format: Title - Author):",
            Tab::Notes => "Add new note:",
            Tab::Timers => "Add new timer (Format: Description - Duration, e.g. 1h30m):",
        }
    }
}

/// UI mode for the application, derived from the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingItem,
    Searching,
}
