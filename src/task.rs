//! Task data structure and related functionality.
//!
//! This module defines the core `Task` struct that represents a single work item:
//! a numeric priority (lower = more urgent), a due date, a unique name, and the
//! names of tasks it depends on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single tracked task.
///
/// The `name` is the task's identity: at most one pending task may carry a
/// given name at a time. `dependencies` are plain name references to other
/// tasks that must appear in the completed history before this one can be
/// completed; they are not checked for existence or cycles.
///
/// Field order matches the persisted JSON shape:
/// `{"priority": 2, "due_date": "2025-03-01", "name": "...", "dependencies": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub priority: i64,
    pub due_date: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    /// Sort key for priority-first ordering: (priority, due_date, name).
    pub fn priority_key(&self) -> (i64, NaiveDate, &str) {
        (self.priority, self.due_date, self.name.as_str())
    }

    /// Sort key for due-date-first ordering: (due_date, priority, name).
    pub fn due_key(&self) -> (NaiveDate, i64, &str) {
        (self.due_date, self.priority, self.name.as_str())
    }
}
