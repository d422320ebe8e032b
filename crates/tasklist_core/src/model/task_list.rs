//! Ordered task collection with value-returning transitions.
//!
//! # Invariants
//! - Insertion order is display order; nothing re-sorts the list.
//! - All ids are pairwise distinct.
//! - Transitions never edit `self`; they return the next list value.

use crate::model::task::{Task, TaskId, TaskValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The whole task list. Serializes as a bare JSON array of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from already-constructed tasks, checking invariants.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskValidationError> {
        let list = Self { tasks };
        list.validate()?;
        Ok(list)
    }

    /// Checks every task plus id distinctness.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            task.validate()?;
            if !seen.insert(task.id) {
                return Err(TaskValidationError::DuplicateId(task.id));
            }
        }
        Ok(())
    }

    /// Returns the list with `task` appended.
    ///
    /// The caller is responsible for handing in a fresh id; see
    /// [`crate::clock::next_task_id`].
    pub fn with_added(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend(self.tasks.iter().cloned());
        tasks.push(task);
        Self { tasks }
    }

    /// Returns the list with the task `id` flipped. Unknown ids yield an
    /// equal list.
    pub fn with_toggled(&self, id: TaskId) -> Self {
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect();
        Self { tasks }
    }

    /// Returns the list without the task `id`. Unknown ids yield an equal
    /// list.
    pub fn without(&self, id: TaskId) -> Self {
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        Self { tasks }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Task at zero-based display position.
    pub fn at(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(|task| task.id).max()
    }

    /// Number of tasks not yet completed.
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
