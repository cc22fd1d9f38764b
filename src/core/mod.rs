//! Core history types.
//!
//! This module contains the pure functional core of the crate:
//! - A persistent stack with structural sharing
//! - The immutable past/present/future history built on it
//!
//! All logic in this module is pure (no side effects). Every operation
//! returns a new value and leaves its input usable.

mod history;
mod stack;

pub use history::History;
pub use stack::{Iter, Stack};
