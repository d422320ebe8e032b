//! Task-list domain model.
//!
//! # Responsibility
//! - Define the canonical task record and the ordered list holding it.
//! - Keep list transitions pure so callers re-render from returned values.
//!
//! # Invariants
//! - Every task in a list has a distinct `TaskId`.
//! - Deletion is a hard remove; there is no tombstone state.

pub mod task;
pub mod task_list;
