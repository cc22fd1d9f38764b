//! Rewind: a persistent, immutable undo/redo history
//!
//! Rewind tracks a single current value together with the values before
//! and after it. Every operation is a pure function that returns a new
//! history; older snapshots stay valid and cheap to keep around because
//! the past and future share structure between versions.
//!
//! # Core Concepts
//!
//! - **History**: The present value plus its past and future
//! - **Back / Forward**: Undo and redo, no-ops at either end
//! - **To / Evolve**: Commit a new present, discarding the future
//! - **Stack**: The persistent list backing past and future
//!
//! # Example
//!
//! ```rust
//! use rewind::History;
//!
//! let history = History::new(0).to(1).to(2);
//! assert_eq!(*history.current(), 2);
//!
//! let undone = history.back();
//! assert_eq!(*undone.current(), 1);
//! assert_eq!(undone.forward(), history);
//!
//! // A new present cuts off the redo branch
//! let branched = undone.to(99);
//! assert_eq!(branched.forward(), branched);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, HistoryBuilder};
pub use crate::core::{History, Stack};
