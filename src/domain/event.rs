/// A key press, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// A character typed with Ctrl held
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
}

/// Everything the application reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(Key),
    /// Pointer click on a named target, e.g. a tab title
    Click(String),
    /// Periodic timer tick
    Tick,
}
