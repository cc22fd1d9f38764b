//! Builder API for ergonomic history construction.
//!
//! This module provides a fluent builder and a macro for creating
//! histories with a known past and future, e.g. when a host restores a
//! history it persisted in its own format.

pub mod error;
pub mod history;
pub mod macros;

pub use error::BuildError;
pub use history::HistoryBuilder;
