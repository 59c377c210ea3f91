use super::duration::{format_remaining, parse_duration};
use super::error::InputError;
use chrono::Duration;
use std::fmt;
use std::str::FromStr;

/// Split "left - right" on the first `-`, trimming both sides.
/// Either side being blank counts as a bad format.
fn split_pair<'a>(input: &'a str, expected: &'static str) -> Result<(&'a str, &'a str), InputError> {
    let (left, right) = input
        .split_once('-')
        .ok_or(InputError::InvalidFormat { expected })?;
    let (left, right) = (left.trim(), right.trim());

    if left.is_empty() || right.is_empty() {
        return Err(InputError::InvalidFormat { expected });
    }
    Ok((left, right))
}

/// Trimmed free text, rejecting blank input
fn non_blank(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(trimmed.to_string())
    }
}

/// A homework assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(pub String);

impl FromStr for Assignment {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        non_blank(s).map(Assignment)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A free-form note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note(pub String);

impl FromStr for Note {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        non_blank(s).map(Note)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book or text on the reading list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingMaterial {
    pub title: String,
    pub author: String,
    pub read: bool,
}

impl ReadingMaterial {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            read: false,
        }
    }

    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }
}

impl FromStr for ReadingMaterial {
    type Err = InputError;

    /// Parse "Title - Author"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (title, author) = split_pair(s, "Title - Author")?;
        Ok(Self::new(title, author))
    }
}

impl fmt::Display for ReadingMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.author)
    }
}

/// A study countdown timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub description: String,
    /// Time left on the countdown, never negative
    pub remaining: Duration,
}

impl Timer {
    pub fn new(description: impl Into<String>, remaining: Duration) -> Self {
        Self {
            description: description.into(),
            remaining: remaining.max(Duration::zero()),
        }
    }

    /// Count down by one tick, stopping at zero
    pub fn tick(&mut self, unit: Duration) {
        self.remaining = (self.remaining - unit).max(Duration::zero());
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= Duration::zero()
    }

    /// Remaining time as "1h29m59s", or "done" once finished
    pub fn remaining_formatted(&self) -> String {
        if self.is_finished() {
            "done".to_string()
        } else {
            format_remaining(self.remaining)
        }
    }
}

impl FromStr for Timer {
    type Err = InputError;

    /// Parse "Description - Duration"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (description, duration) = split_pair(s, "Description - Duration")?;
        let remaining = parse_duration(duration)?;
        Ok(Self::new(description, remaining))
    }
}
