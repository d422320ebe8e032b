//! Time source and task id allocation.
//!
//! # Invariants
//! - Ids are creation timestamps in epoch milliseconds.
//! - A newly allocated id never collides with an id already in the list,
//!   even when two adds land in the same millisecond.
//! - Below `TaskId::MAX` it is also strictly greater than every existing id.

use crate::model::task::TaskId;
use crate::model::task_list::TaskList;
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond wall clock, injectable for tests.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// `SystemTime`-backed clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        // A clock set before 1970 degrades to 0; next_task_id still keeps
        // ids distinct.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// Returns the id for a task appended to `list` now.
///
/// Uses the clock reading, bumped to `max_id + 1` when the clock has not
/// moved past the newest id. Once `max_id` is `TaskId::MAX` the lowest
/// unused id is handed out instead.
pub fn next_task_id(clock: &impl Clock, list: &TaskList) -> TaskId {
    let now = clock.now_ms();
    match list.max_id() {
        Some(max_id) if now <= max_id => max_id
            .checked_add(1)
            .unwrap_or_else(|| lowest_unused_id(list)),
        _ => now,
    }
}

fn lowest_unused_id(list: &TaskList) -> TaskId {
    let mut ids: Vec<TaskId> = list.iter().map(|task| task.id).collect();
    ids.sort_unstable();

    // A list can never hold every i64, so a gap always exists.
    let mut candidate = TaskId::MIN;
    for id in ids {
        if id != candidate {
            break;
        }
        candidate = candidate.saturating_add(1);
    }
    candidate
}
