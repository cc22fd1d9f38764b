//! Builder for constructing histories.

use crate::builder::error::BuildError;
use crate::core::History;

/// Builder for constructing a history with a fluent API.
///
/// Past and future items are given most-recent-first, like
/// [`History::from_list`].
///
/// # Example
///
/// ```rust
/// use rewind::HistoryBuilder;
///
/// let history = HistoryBuilder::new()
///     .past(["v2", "v1"])
///     .current("v3")
///     .future(["v4"])
///     .build()
///     .unwrap();
///
/// assert_eq!(*history.back().current(), "v2");
/// assert_eq!(*history.forward().current(), "v4");
/// ```
pub struct HistoryBuilder<T> {
    past: Vec<T>,
    current: Option<T>,
    future: Vec<T>,
}

impl<T> HistoryBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            current: None,
            future: Vec::new(),
        }
    }

    /// Set the current value (required).
    pub fn current(mut self, value: T) -> Self {
        self.current = Some(value);
        self
    }

    /// Append values to the past, after any already added.
    pub fn past<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.past.extend(items);
        self
    }

    /// Append values to the future, after any already added.
    pub fn future<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.future.extend(items);
        self
    }

    /// Add a single value as the oldest past entry so far.
    pub fn push_past(mut self, value: T) -> Self {
        self.past.push(value);
        self
    }

    /// Add a single value as the furthest future entry so far.
    pub fn push_future(mut self, value: T) -> Self {
        self.future.push(value);
        self
    }

    /// Build the history.
    /// Returns an error if no current value was set.
    pub fn build(self) -> Result<History<T>, BuildError> {
        let current = self.current.ok_or(BuildError::MissingCurrent)?;
        Ok(History::from_parts(self.past, current, self.future))
    }
}

impl<T> Default for HistoryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Same as [`History::from_list`], for callers that want a `Result`.
impl<T> TryFrom<Vec<T>> for History<T> {
    type Error = BuildError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        History::from_list(items).ok_or(BuildError::EmptyInput)
    }
}
