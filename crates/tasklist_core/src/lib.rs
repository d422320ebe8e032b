//! Core logic for the task list.
//! This crate is the single source of truth for task-list invariants.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use clock::{next_task_id, Clock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::task_list::TaskList;
pub use repo::task_list_repo::{
    decode_task_list, encode_task_list, LoadOutcome, RepoError, RepoResult, TaskListRepository,
    STORAGE_KEY,
};
pub use service::task_controller::TaskController;
pub use storage::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
