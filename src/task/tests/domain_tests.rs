//! Domain-focused tests for task records and display ordering.

use crate::task::domain::{Priority, Task, TaskId, sort_for_display};
use chrono::NaiveDateTime;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn new_task_generates_unique_identifiers(clock: DefaultClock) {
    let first = Task::new("Buy milk", None, Priority::MEDIUM, &clock);
    let second = Task::new("Buy milk", None, Priority::MEDIUM, &clock);

    assert_ne!(first.id(), second.id());
    assert!(!first.completed());
    assert_eq!(first.priority(), Priority::MEDIUM);
    assert_eq!(first.title(), "Buy milk");
    assert!(first.description().is_none());
}

#[rstest]
fn created_at_uses_minute_precision_format(clock: DefaultClock) {
    let task = Task::new("Stamped", None, Priority::LOW, &clock);

    NaiveDateTime::parse_from_str(task.created_at(), "%Y-%m-%d %H:%M")
        .expect("created_at should use the YYYY-MM-DD HH:MM format");
}

#[rstest]
fn toggle_is_self_inverse_and_preserves_created_at(clock: DefaultClock) {
    let mut task = Task::new("Flip me", None, Priority::LOW, &clock);
    let created = task.created_at().to_owned();

    task.toggle();
    assert!(task.completed());

    task.toggle();
    assert!(!task.completed());
    assert_eq!(task.created_at(), created);
}

#[rstest]
fn task_serialises_to_the_flat_wire_shape(clock: DefaultClock) {
    let task = Task::new("Wire", Some("shape".to_owned()), Priority::HIGH, &clock);

    let value = serde_json::to_value(&task).expect("task should serialise");
    let object = value.as_object().expect("task serialises as an object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();

    assert_eq!(
        keys,
        ["completed", "created_at", "description", "id", "priority", "title"]
    );
    assert_eq!(object.get("priority"), Some(&serde_json::json!(3)));
    assert_eq!(object.get("completed"), Some(&serde_json::json!(false)));
}

#[rstest]
fn deserialisation_applies_the_form_path_defaults() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "client-1",
        "title": "From the wire",
        "created_at": "2031-12-24 18:05",
    }))
    .expect("minimal payload should deserialise");

    assert_eq!(task.id(), &TaskId::from("client-1"));
    assert!(task.description().is_none());
    assert!(!task.completed());
    assert_eq!(task.priority(), Priority::LOW);
    assert_eq!(task.created_at(), "2031-12-24 18:05");
}

#[rstest]
fn out_of_range_priorities_round_trip_untouched() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "client-2",
        "title": "Severity nine",
        "created_at": "2031-12-24 18:06",
        "priority": 9,
    }))
    .expect("payload should deserialise");

    assert_eq!(task.priority(), Priority::new(9));

    let value = serde_json::to_value(&task).expect("task should serialise");
    assert_eq!(value.get("priority"), Some(&serde_json::json!(9)));
}

#[rstest]
fn display_order_puts_higher_priority_first(clock: DefaultClock) {
    let milk = Task::new("Buy milk", None, Priority::MEDIUM, &clock);
    let bug = Task::new("Fix bug", None, Priority::HIGH, &clock);

    let mut tasks = vec![milk, bug];
    sort_for_display(&mut tasks);

    let titles: Vec<&str> = tasks.iter().map(Task::title).collect();
    assert_eq!(titles, ["Fix bug", "Buy milk"]);
}

#[rstest]
fn completed_tasks_sort_behind_every_incomplete_task(clock: DefaultClock) {
    let mut urgent = Task::new("Ship release", None, Priority::HIGH, &clock);
    let chore = Task::new("Water plants", None, Priority::LOW, &clock);
    urgent.toggle();

    let mut tasks = vec![urgent, chore];
    sort_for_display(&mut tasks);

    let titles: Vec<&str> = tasks.iter().map(Task::title).collect();
    assert_eq!(titles, ["Water plants", "Ship release"]);
}

#[rstest]
fn display_order_keeps_insertion_order_on_ties(clock: DefaultClock) {
    let first = Task::new("First", None, Priority::MEDIUM, &clock);
    let second = Task::new("Second", None, Priority::MEDIUM, &clock);

    let mut tasks = vec![first, second];
    sort_for_display(&mut tasks);

    let titles: Vec<&str> = tasks.iter().map(Task::title).collect();
    assert_eq!(titles, ["First", "Second"]);
}
