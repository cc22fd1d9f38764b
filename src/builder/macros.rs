//! Macros for ergonomic history construction.

/// Create a history from literal values.
///
/// The first expression becomes the current value and the rest become the
/// past, most recent first. Unlike [`History::from_list`](crate::History::from_list)
/// this cannot fail: the macro requires at least one value.
///
/// # Example
///
/// ```
/// use rewind::history;
///
/// let history = history!["third", "second", "first"];
///
/// assert_eq!(*history.current(), "third");
/// assert_eq!(*history.back().current(), "second");
/// assert_eq!(history.past_len(), 2);
/// ```
#[macro_export]
macro_rules! history {
    ($current:expr $(, $past:expr)* $(,)?) => {
        $crate::core::History::from_parts(
            ::std::vec![$($past),*],
            $current,
            ::std::vec::Vec::new(),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::core::History;

    #[test]
    fn history_macro_with_single_value() {
        let history = history![5];
        assert_eq!(history, History::new(5));
    }

    #[test]
    fn history_macro_matches_from_list() {
        let history = history![1, 2, 3];
        assert_eq!(Some(history), History::from_list(vec![1, 2, 3]));
    }

    #[test]
    fn history_macro_accepts_trailing_comma() {
        let history = history!["b", "a",];
        assert_eq!(*history.current(), "b");
        assert!(!history.can_forward());
    }
}
