use std::cell::Cell;
use std::collections::HashSet;
use tasklist_core::{next_task_id, Clock, Task, TaskList};

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

struct SteppingClock(Cell<i64>);

impl Clock for SteppingClock {
    fn now_ms(&self) -> i64 {
        let now = self.0.get();
        self.0.set(now + 10);
        now
    }
}

fn sample_list() -> TaskList {
    TaskList::from_tasks(vec![
        Task::new(10, "alpha").unwrap(),
        Task::new(20, "beta").unwrap(),
        Task::new(30, "gamma").unwrap(),
    ])
    .unwrap()
}

#[test]
fn with_added_appends_and_leaves_original_untouched() {
    let original = sample_list();
    let next = original.with_added(Task::new(40, "delta").unwrap());

    assert_eq!(original.len(), 3);
    assert_eq!(next.len(), 4);
    assert_eq!(next.at(3).unwrap().title, "delta");
    assert_eq!(&next.as_slice()[..3], original.as_slice());
}

#[test]
fn toggling_twice_restores_state_and_leaves_others_equal() {
    let original = sample_list();

    let once = original.with_toggled(20);
    assert!(once.get(20).unwrap().completed);
    assert_eq!(once.get(10), original.get(10));
    assert_eq!(once.get(30), original.get(30));

    let twice = once.with_toggled(20);
    assert_eq!(twice, original);
}

#[test]
fn toggling_unknown_id_returns_equal_list() {
    let original = sample_list();
    assert_eq!(original.with_toggled(99), original);
}

#[test]
fn without_removes_exactly_the_matching_task() {
    let original = sample_list();

    let removed = original.without(20);
    assert_eq!(removed.len(), original.len() - 1);
    assert!(!removed.contains(20));
    let titles: Vec<_> = removed.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["alpha", "gamma"]);

    let unchanged = original.without(99);
    assert_eq!(unchanged, original);
}

#[test]
fn remaining_counts_open_tasks() {
    let list = sample_list().with_toggled(10).with_toggled(30);
    assert_eq!(list.remaining(), 1);
}

#[test]
fn next_task_id_uses_clock_when_it_is_ahead() {
    let list = sample_list();
    assert_eq!(next_task_id(&FixedClock(1_000), &list), 1_000);
    assert_eq!(next_task_id(&FixedClock(5), &TaskList::new()), 5);
}

#[test]
fn next_task_id_bumps_past_existing_ids_within_one_millisecond() {
    let clock = FixedClock(30);
    let mut list = sample_list();
    let mut ids = HashSet::new();

    for n in 0..50 {
        let id = next_task_id(&clock, &list);
        list = list.with_added(Task::new(id, &format!("task {n}")).unwrap());
        ids.insert(id);
    }

    assert_eq!(ids.len(), 50);
    assert!(list.validate().is_ok());
}

#[test]
fn next_task_id_is_non_decreasing_with_advancing_clock() {
    let clock = SteppingClock(Cell::new(100));
    let mut list = TaskList::new();
    let mut last = i64::MIN;

    for n in 0..10 {
        let id = next_task_id(&clock, &list);
        assert!(id > last);
        last = id;
        list = list.with_added(Task::new(id, &format!("step {n}")).unwrap());
    }

    assert_eq!(list.at(0).unwrap().id, 100);
    assert_eq!(list.at(9).unwrap().id, 190);
}

#[test]
fn next_task_id_falls_back_to_unused_id_at_i64_max() {
    let clock = FixedClock(1_000);
    let mut list = TaskList::from_tasks(vec![Task::new(i64::MAX, "last").unwrap()]).unwrap();

    let first = next_task_id(&clock, &list);
    assert_ne!(first, i64::MAX);
    list = list.with_added(Task::new(first, "after max").unwrap());

    let second = next_task_id(&clock, &list);
    assert_ne!(second, first);
    assert_ne!(second, i64::MAX);
    list = list.with_added(Task::new(second, "after max again").unwrap());

    assert!(list.validate().is_ok());
    assert_eq!(list.len(), 3);
}
