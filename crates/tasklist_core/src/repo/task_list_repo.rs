//! Task-list persistence over a single storage slot.
//!
//! # Responsibility
//! - Serialize the whole list into the `todos` slot after every change.
//! - Load the list once at startup, recovering from bad slot contents.
//!
//! # Invariants
//! - Writes are full replacements; there are no incremental updates.
//! - A malformed or invariant-violating slot loads as an empty list and
//!   never fails the caller.

use crate::model::task::TaskValidationError;
use crate::model::task_list::TaskList;
use crate::storage::{KeyValueStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name of the storage slot holding the serialized list.
pub const STORAGE_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error from reading, decoding or writing the storage slot.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Decode(serde_json::Error),
    Encode(serde_json::Error),
    InvalidData(TaskValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "malformed task list in slot `{STORAGE_KEY}`: {err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
            Self::InvalidData(err) => {
                write!(f, "invalid persisted task list in slot `{STORAGE_KEY}`: {err}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
            Self::InvalidData(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidData(value)
    }
}

/// How the startup load resolved.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Slot absent; the list starts empty.
    Empty,
    /// Slot decoded into a valid list.
    Loaded,
    /// Slot unreadable or invalid; the list starts empty.
    Recovered(RepoError),
}

/// Reads and writes the task list through a key-value store.
pub struct TaskListRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TaskListRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted list, falling back to an empty list.
    pub fn load(&self) -> (TaskList, LoadOutcome) {
        match self.try_load() {
            Ok(Some(list)) => {
                info!(
                    "event=task_list_load module=repo status=ok count={}",
                    list.len()
                );
                (list, LoadOutcome::Loaded)
            }
            Ok(None) => {
                info!("event=task_list_load module=repo status=empty");
                (TaskList::new(), LoadOutcome::Empty)
            }
            Err(err) => {
                warn!(
                    "event=task_list_load module=repo status=recovered error={}",
                    err
                );
                (TaskList::new(), LoadOutcome::Recovered(err))
            }
        }
    }

    /// Strict variant of [`Self::load`]; surfaces every failure.
    pub fn try_load(&self) -> RepoResult<Option<TaskList>> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(None);
        };
        decode_task_list(&raw).map(Some)
    }

    /// Overwrites the slot with the full list.
    pub fn save(&self, list: &TaskList) -> RepoResult<()> {
        let raw = encode_task_list(list)?;
        self.store.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Encodes a list as the JSON array stored in the slot.
pub fn encode_task_list(list: &TaskList) -> RepoResult<String> {
    serde_json::to_string(list).map_err(RepoError::Encode)
}

/// Decodes and validates slot contents.
pub fn decode_task_list(raw: &str) -> RepoResult<TaskList> {
    let list: TaskList = serde_json::from_str(raw).map_err(RepoError::Decode)?;
    list.validate()?;
    Ok(list)
}
