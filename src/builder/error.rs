//! Build errors for history construction.

use thiserror::Error;

/// Errors that can occur when building a history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Current value not specified. Call .current(value) before .build()")]
    MissingCurrent,

    #[error("Cannot build a history from an empty sequence")]
    EmptyInput,
}
