//! Task-list controller.
//!
//! # Responsibility
//! - Own the current list and the draft input text.
//! - Apply add/toggle/delete transitions and persist after each change.
//!
//! # Invariants
//! - Every state-changing call saves the full list before returning.
//! - A failed save is logged and never rolls back in-memory state.
//! - No-op calls (blank input, unknown id) neither change state nor save.

use crate::clock::{next_task_id, Clock, SystemClock};
use crate::model::task::{Task, TaskId};
use crate::model::task_list::TaskList;
use crate::repo::task_list_repo::{LoadOutcome, TaskListRepository};
use crate::storage::KeyValueStore;
use log::{debug, info, warn};

/// Holds list + draft state and funnels every mutation through one path.
///
/// After any call the caller re-renders from [`TaskController::tasks`].
pub struct TaskController<S: KeyValueStore, C: Clock = SystemClock> {
    repo: TaskListRepository<S>,
    clock: C,
    tasks: TaskList,
    draft: String,
    persistence_healthy: bool,
}

impl<S: KeyValueStore> TaskController<S, SystemClock> {
    /// Creates a controller stamping ids from the system clock.
    pub fn new(store: S) -> (Self, LoadOutcome) {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskController<S, C> {
    /// Creates a controller and loads the persisted list once.
    pub fn with_clock(store: S, clock: C) -> (Self, LoadOutcome) {
        let repo = TaskListRepository::new(store);
        let (tasks, outcome) = repo.load();
        let controller = Self {
            repo,
            clock,
            tasks,
            draft: String::new(),
            persistence_healthy: true,
        };
        (controller, outcome)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the most recent save reached the store.
    pub fn persistence_healthy(&self) -> bool {
        self.persistence_healthy
    }

    /// Submits the current draft. Both the Enter key and the add button
    /// land here.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = std::mem::take(&mut self.draft);
        let added = self.add_task(&draft);
        if added.is_none() {
            // Rejected input stays in the field.
            self.draft = draft;
        }
        added
    }

    /// Appends a task titled `text.trim()`, clearing the draft.
    ///
    /// Returns the new id, or `None` when the trimmed text is empty.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = next_task_id(&self.clock, &self.tasks);
        let task = match Task::new(id, text) {
            Ok(task) => task,
            Err(_) => {
                debug!("event=task_add module=service status=ignored reason=empty_title");
                return None;
            }
        };

        info!("event=task_add module=service status=ok id={id}");
        self.apply(self.tasks.with_added(task));
        self.draft.clear();
        Some(id)
    }

    /// Flips `completed` on task `id`. Returns `false` for unknown ids.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        if !self.tasks.contains(id) {
            debug!("event=task_toggle module=service status=ignored id={id}");
            return false;
        }

        info!("event=task_toggle module=service status=ok id={id}");
        self.apply(self.tasks.with_toggled(id));
        true
    }

    /// Removes task `id`. Returns `false` for unknown ids.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        if !self.tasks.contains(id) {
            debug!("event=task_delete module=service status=ignored id={id}");
            return false;
        }

        info!("event=task_delete module=service status=ok id={id}");
        self.apply(self.tasks.without(id));
        true
    }

    /// Resolves a zero-based display position to a task id.
    pub fn id_at(&self, position: usize) -> Option<TaskId> {
        self.tasks.at(position).map(|task| task.id)
    }

    fn apply(&mut self, next: TaskList) {
        self.tasks = next;
        match self.repo.save(&self.tasks) {
            Ok(()) => {
                debug!(
                    "event=task_list_save module=service status=ok count={}",
                    self.tasks.len()
                );
                self.persistence_healthy = true;
            }
            Err(err) => {
                warn!(
                    "event=task_list_save module=service status=error count={} error={}",
                    self.tasks.len(),
                    err
                );
                self.persistence_healthy = false;
            }
        }
    }
}
