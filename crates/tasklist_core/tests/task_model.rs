use tasklist_core::{Task, TaskList, TaskValidationError};

#[test]
fn task_new_trims_title_and_starts_open() {
    let task = Task::new(7, "  Buy milk \t").unwrap();

    assert_eq!(task.id, 7);
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);
}

#[test]
fn task_new_rejects_blank_titles() {
    for input in ["", " ", "\t\n", "   \r\n  "] {
        assert_eq!(
            Task::new(1, input).unwrap_err(),
            TaskValidationError::EmptyTitle,
            "input {input:?} should be rejected"
        );
    }
}

#[test]
fn toggled_only_flips_completed() {
    let task = Task::new(1, "write report").unwrap();
    let toggled = task.toggled();

    assert!(toggled.completed);
    assert_eq!(toggled.id, task.id);
    assert_eq!(toggled.title, task.title);
    assert_eq!(toggled.toggled(), task);
}

#[test]
fn task_serialization_uses_slot_field_names() {
    let mut task = Task::new(1_700_000_000_000, "water plants").unwrap();
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1_700_000_000_000_i64,
            "title": "water plants",
            "completed": true
        })
    );
}

#[test]
fn task_list_serializes_as_bare_array() {
    let list = TaskList::new()
        .with_added(Task::new(1, "a").unwrap())
        .with_added(Task::new(2, "b").unwrap());

    let json = serde_json::to_value(&list).unwrap();
    assert!(json.is_array());
    assert_eq!(json[1]["title"], "b");
}

#[test]
fn validate_rejects_untrimmed_title_and_duplicate_ids() {
    let untrimmed = Task {
        id: 3,
        title: " padded".to_string(),
        completed: false,
    };
    assert_eq!(
        untrimmed.validate().unwrap_err(),
        TaskValidationError::UntrimmedTitle(3)
    );

    let err = TaskList::from_tasks(vec![
        Task::new(5, "first").unwrap(),
        Task::new(5, "second").unwrap(),
    ])
    .unwrap_err();
    assert_eq!(err, TaskValidationError::DuplicateId(5));
}
