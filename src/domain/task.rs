//! Task record and its owned title text.

use super::{Period, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periods carried by every task record.
///
/// The wire format writes the periods back to back with no count field, so
/// both sides of a round trip must agree on this width at build time.
pub const TASK_PERIOD_COUNT: usize = 2;

/// Owned, validated title text for a task.
///
/// The wire format delimits the title with a NUL terminator, so the text may
/// not itself contain NUL bytes. The empty title is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleContainsNul`] when the text contains
    /// an interior NUL byte.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskDomainError> {
        let owned: String = text.into();
        if owned.as_bytes().contains(&0) {
            return Err(TaskDomainError::TitleContainsNul);
        }
        Ok(Self(owned))
    }

    /// Builds a title from text already known to be NUL-free.
    ///
    /// The wire decoder delimits the text at the first NUL byte, so the
    /// precondition holds by construction there.
    pub(crate) fn from_nul_free(text: &str) -> Self {
        debug_assert!(!text.as_bytes().contains(&0));
        Self(text.to_owned())
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the title length in bytes, excluding any terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the title is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Title {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Title {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task record: an owned title, a fixed pair of periods, and a selection
/// flag.
///
/// The title allocation belongs to the record for its whole lifetime;
/// replacing it through [`Task::set_title`] drops the previous allocation.
/// The periods are embedded inline by value, not held through a separate
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    title: Title,
    periods: [Period; TASK_PERIOD_COUNT],
    selected: bool,
}

impl Task {
    /// Creates a task from its parts.
    #[must_use]
    pub const fn new(title: Title, periods: [Period; TASK_PERIOD_COUNT], selected: bool) -> Self {
        Self {
            title,
            periods,
            selected,
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the embedded period array.
    #[must_use]
    pub const fn periods(&self) -> &[Period; TASK_PERIOD_COUNT] {
        &self.periods
    }

    /// Returns the selection flag.
    #[must_use]
    pub const fn selected(&self) -> bool {
        self.selected
    }

    /// Replaces the owned title, dropping the previous allocation.
    pub fn set_title(&mut self, title: Title) {
        self.title = title;
    }

    /// Replaces the embedded period array.
    pub const fn set_periods(&mut self, periods: [Period; TASK_PERIOD_COUNT]) {
        self.periods = periods;
    }

    /// Replaces the selection flag.
    pub const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Task) {{ .title = {}, .periods = {{ ", self.title)?;
        for (index, period) in self.periods.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{period}")?;
        }
        write!(f, " }}, .selected = {} }}", self.selected)
    }
}

/// Renders an optional task, using `(Task) NULL` for the absent case so it
/// stays distinguishable from any populated record.
#[must_use]
pub fn render_task(task: Option<&Task>) -> String {
    task.map_or_else(|| "(Task) NULL".to_owned(), ToString::to_string)
}
