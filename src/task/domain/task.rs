//! Task record and display ordering.

use super::{Priority, TaskId};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Minute-precision creation timestamp format.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single to-do record.
///
/// The serialised shape is flat: `{id, title, description, completed,
/// created_at, priority}`. Deserialisation mirrors the form-path defaults,
/// so API clients may omit `description` (absent), `completed` (false),
/// and `priority` (low). `id` and `created_at` are required on the wire
/// and accepted verbatim; nothing is validated or re-stamped for
/// caller-formed tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    created_at: String,
    #[serde(default)]
    priority: Priority,
}

impl Task {
    /// Creates a new incomplete task with a generated identifier and a
    /// creation timestamp stamped from the given clock.
    ///
    /// Input is stored as given: empty titles and out-of-range priorities
    /// are accepted.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        priority: Priority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            description,
            completed: false,
            created_at: clock.utc().format(CREATED_AT_FORMAT).to_string(),
            priority,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp, formatted as `YYYY-MM-DD HH:MM`
    /// for tasks created by the board.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Flips the completion flag.
    ///
    /// The transition has no guards: toggling a completed task marks it
    /// incomplete again. `created_at` is never touched.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Sorts tasks for display: incomplete before completed, then by
/// descending priority within each group.
///
/// The sort is stable, so tasks tied on both keys keep insertion order.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| (task.completed(), Reverse(task.priority())));
}
