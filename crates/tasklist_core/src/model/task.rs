//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the task list.
//! - Enforce title normalization at construction time.
//!
//! # Invariants
//! - `title` is non-empty and already trimmed.
//! - `completed` starts as `false`.
//! - A task is created fully-formed or not at all.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task identifier: creation time in Unix epoch milliseconds.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Validation errors for task and task-list invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Title carries leading or trailing whitespace.
    UntrimmedTitle(TaskId),
    /// Two tasks in one list share an id.
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::UntrimmedTitle(id) => {
                write!(f, "task {id} title has surrounding whitespace")
            }
            Self::DuplicateId(id) => write!(f, "duplicate task id {id}"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
///
/// Serialized as `{"id": <number>, "title": <string>, "completed": <bool>}`,
/// which is the shape stored in the storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open task from raw user text.
    ///
    /// # Errors
    /// - Returns `EmptyTitle` when `title` is empty after trimming.
    pub fn new(id: TaskId, title: &str) -> Result<Self, TaskValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: trimmed.to_string(),
            completed: false,
        })
    }

    /// Validates a task that did not come through [`Task::new`], e.g. one
    /// decoded from storage.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if trimmed.len() != self.title.len() {
            return Err(TaskValidationError::UntrimmedTitle(self.id));
        }
        Ok(())
    }

    /// Returns a copy with `completed` inverted.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
