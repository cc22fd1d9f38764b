//! Linear undo/redo history.
//!
//! Provides an immutable zipper over past, present and future values,
//! following functional programming principles: every operation returns a
//! new history and leaves the receiver untouched.

use super::stack::{Iter, Stack};

/// A present value together with the values before and after it.
///
/// `History` keeps exactly one current value at all times. The past and
/// future are persistent stacks ordered most-recent-first, so moving
/// between them is O(1) and every earlier snapshot remains usable.
///
/// Setting a new present with [`History::to`] or [`History::evolve`]
/// discards the future, the same way following a link after pressing
/// "back" in a browser drops the pages you could have gone forward to.
///
/// # Example
///
/// ```rust
/// use rewind::History;
///
/// let h0 = History::new(0);
/// let h1 = h0.to(1);
/// let h2 = h1.to(2);
///
/// let h3 = h2.back();
/// assert_eq!(*h3.current(), 1);
///
/// let h4 = h3.forward();
/// assert_eq!(h4, h2);
///
/// let h5 = h3.to(99);
/// assert_eq!(*h5.current(), 99);
/// assert!(!h5.can_forward()); // Future [2] discarded
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History<T> {
    past: Stack<T>,
    current: T,
    future: Stack<T>,
}

impl<T> History<T> {
    /// Create a history holding only `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::History;
    ///
    /// let history = History::new("draft");
    /// assert_eq!(*history.current(), "draft");
    /// assert_eq!(history.past_len(), 0);
    /// assert_eq!(history.future_len(), 0);
    /// ```
    pub fn new(value: T) -> Self {
        Self {
            past: Stack::new(),
            current: value,
            future: Stack::new(),
        }
    }

    /// Create a history from a sequence of values.
    ///
    /// The first item becomes the current value and the remaining items
    /// become the past, in the order given (most recent first). The future
    /// starts empty. Returns `None` when `items` is empty, since a history
    /// always needs a present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::History;
    ///
    /// let history = History::from_list(vec!['a', 'b', 'c']).unwrap();
    /// assert_eq!(*history.current(), 'a');
    /// assert_eq!(*history.back().current(), 'b');
    ///
    /// assert!(History::<char>::from_list(Vec::new()).is_none());
    /// ```
    pub fn from_list<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let current = items.next()?;
        Some(Self {
            past: items.collect(),
            current,
            future: Stack::new(),
        })
    }

    /// Reassemble a history from its three regions.
    ///
    /// `past` and `future` are both ordered most-recent-first: the first
    /// past item is what [`History::back`] restores, and the first future
    /// item is what [`History::forward`] restores. This is the inverse of
    /// [`History::into_parts`].
    pub fn from_parts<P, F>(past: P, current: T, future: F) -> Self
    where
        P: IntoIterator<Item = T>,
        F: IntoIterator<Item = T>,
    {
        Self {
            past: past.into_iter().collect(),
            current,
            future: future.into_iter().collect(),
        }
    }

    /// The present value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Values before the present, most recent first.
    pub fn past(&self) -> Iter<'_, T> {
        self.past.iter()
    }

    /// Values after the present, the next one to redo first.
    pub fn future(&self) -> Iter<'_, T> {
        self.future.iter()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Check whether [`History::back`] would move.
    pub fn can_back(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check whether [`History::forward`] would move.
    pub fn can_forward(&self) -> bool {
        !self.future.is_empty()
    }

    /// Transform every value in the history, keeping its shape.
    ///
    /// The value at the current position stays current, regardless of
    /// what `f` returns, and the past and future keep their lengths.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::History;
    ///
    /// let history = History::new(1).to(2).to(3).back();
    /// let labels = history.map(|n| format!("v{n}"));
    ///
    /// assert_eq!(labels.current(), "v2");
    /// assert_eq!(labels.past().collect::<Vec<_>>(), vec!["v1"]);
    /// assert_eq!(labels.future().collect::<Vec<_>>(), vec!["v3"]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> History<U>
    where
        F: FnMut(&T) -> U,
    {
        History {
            past: self.past.map(&mut f),
            current: f(&self.current),
            future: self.future.map(&mut f),
        }
    }
}

impl<T: Clone> History<T> {
    /// Undo: step to the most recent past value.
    ///
    /// The current value moves to the top of the future. When there is no
    /// past, the history is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::History;
    ///
    /// let history = History::new(0).to(1);
    /// let undone = history.back();
    /// assert_eq!(*undone.current(), 0);
    /// assert_eq!(undone.future().collect::<Vec<_>>(), vec![&1]);
    ///
    /// // Nothing left to undo
    /// assert_eq!(undone.back(), undone);
    /// ```
    pub fn back(&self) -> Self {
        match self.past.pop() {
            Some((previous, past)) => Self {
                past,
                current: previous.clone(),
                future: self.future.push(self.current.clone()),
            },
            None => self.clone(),
        }
    }

    /// Redo: step to the next future value.
    ///
    /// The current value moves to the top of the past. When there is no
    /// future, the history is returned unchanged.
    pub fn forward(&self) -> Self {
        match self.future.pop() {
            Some((next, future)) => Self {
                past: self.past.push(self.current.clone()),
                current: next.clone(),
                future,
            },
            None => self.clone(),
        }
    }

    /// Make `next` the present value.
    ///
    /// The old current value is pushed onto the past and the future is
    /// discarded entirely.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::History;
    ///
    /// let history = History::new("home").to("docs").back();
    /// assert!(history.can_forward());
    ///
    /// let history = history.to("blog");
    /// assert_eq!(*history.current(), "blog");
    /// assert_eq!(history.past().collect::<Vec<_>>(), vec![&"home"]);
    /// assert!(!history.can_forward());
    /// ```
    pub fn to(&self, next: T) -> Self {
        Self {
            past: self.past.push(self.current.clone()),
            current: next,
            future: Stack::new(),
        }
    }

    /// Derive a new present value from the current one.
    ///
    /// Equivalent to `self.to(f(self.current()))`; the future is discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::History;
    ///
    /// let history = History::new(10).evolve(|n| n * 2);
    /// assert_eq!(*history.current(), 20);
    /// assert_eq!(*history.back().current(), 10);
    /// ```
    pub fn evolve<F>(&self, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        self.to(f(&self.current))
    }

    /// Split the history into plain vectors: `(past, current, future)`.
    ///
    /// Both vectors are ordered most-recent-first, matching
    /// [`History::from_parts`].
    pub fn into_parts(self) -> (Vec<T>, T, Vec<T>) {
        let History {
            past,
            current,
            future,
        } = self;
        (
            past.iter().cloned().collect(),
            current,
            future.iter().cloned().collect(),
        )
    }
}

impl<T> From<T> for History<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
