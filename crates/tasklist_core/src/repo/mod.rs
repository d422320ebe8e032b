//! Repository layer over the key-value persistence adapter.
//!
//! # Responsibility
//! - Map the in-memory task list to its storage slot.
//! - Keep serialization details out of the controller.
//!
//! # Invariants
//! - Decoded lists pass `TaskList::validate()` before reaching callers.

pub mod task_list_repo;
