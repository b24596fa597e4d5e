//! Diff module for comparing tree documents
//!
//! This module provides the core diff algorithm. It walks both documents
//! recursively and reports each change as a removed value, an added value,
//! or a removed/added pair at the same path when a value was replaced.
//! Arrays are compared strictly by position.

mod classify;
mod engine;

pub use engine::{diff, diff_at, Differ, DEFAULT_MAX_DEPTH};
