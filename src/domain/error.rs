use thiserror::Error;

/// Validation failure for text typed into the add dialog.
///
/// The `Display` text is shown verbatim inside the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input cannot be empty")]
    Empty,

    /// No `-` separator, or one side of it was blank
    #[error("Invalid format. Use '{expected}'")]
    InvalidFormat { expected: &'static str },

    #[error("Invalid duration '{0}'. Use e.g. 1h30m")]
    InvalidDuration(String),
}
