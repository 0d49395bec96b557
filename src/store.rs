//! The task store: pending tasks, completed history, and the operations on them.
//!
//! `TaskStore` owns both collections and their backing files. The pending
//! collection holds at most one task per name; the history is an append-only
//! log of completed tasks and is what dependency gating checks against. Every
//! mutation rewrites the affected file immediately, so there is no separate
//! flush or teardown step.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::db;
use crate::error::TaskError;
use crate::fields::{FilterKey, SortKey};
use crate::task::Task;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a priority string into an integer.
pub fn parse_priority(s: &str) -> Result<i64, TaskError> {
    s.trim()
        .parse()
        .map_err(|_| TaskError::InvalidPriority(s.to_string()))
}

/// Parse a due date string in YYYY-MM-DD form.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, TaskError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| TaskError::InvalidDate(s.to_string()))
}

/// In-memory store backed by two JSON files.
#[derive(Debug)]
pub struct TaskStore {
    pending: Vec<Task>,
    history: Vec<Task>,
    pending_path: PathBuf,
    history_path: PathBuf,
}

impl TaskStore {
    /// Open a store, loading both collections from disk. Missing or corrupt
    /// files come back as empty collections, so this never fails.
    pub fn open(pending_path: &Path, history_path: &Path) -> Self {
        TaskStore {
            pending: db::load_tasks(pending_path),
            history: db::load_tasks(history_path),
            pending_path: pending_path.to_path_buf(),
            history_path: history_path.to_path_buf(),
        }
    }

    /// Pending tasks in insertion order.
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Completed tasks, oldest first.
    pub fn history(&self) -> &[Task] {
        &self.history
    }

    /// Add a new pending task.
    ///
    /// Priority and due date arrive as raw text and are validated here, before
    /// anything is touched. The name only has to be unique among *pending*
    /// tasks: a name may reappear once its previous bearer has been completed.
    pub fn add(
        &mut self,
        name: &str,
        priority: &str,
        due_date: &str,
        dependencies: Vec<String>,
    ) -> Result<(), TaskError> {
        let priority = parse_priority(priority)?;
        if self.pending.iter().any(|t| t.name == name) {
            return Err(TaskError::DuplicateName(name.to_string()));
        }
        let due_date = parse_due_date(due_date)?;
        self.pending.push(Task {
            priority,
            due_date,
            name: name.to_string(),
            dependencies,
        });
        db::save_tasks(&self.pending_path, &self.pending)
    }

    /// Replace the priority, due date, and optionally the dependencies of a
    /// pending task.
    ///
    /// New values are validated before the existing record is touched, so a
    /// failed edit leaves the store exactly as it was. Passing `None` for
    /// `dependencies` keeps the task's current dependency list.
    pub fn edit(
        &mut self,
        name: &str,
        priority: &str,
        due_date: &str,
        dependencies: Option<Vec<String>>,
    ) -> Result<(), TaskError> {
        let priority = parse_priority(priority)?;
        let due_date = parse_due_date(due_date)?;
        let task = self
            .pending
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;
        task.priority = priority;
        task.due_date = due_date;
        if let Some(deps) = dependencies {
            task.dependencies = deps;
        }
        db::save_tasks(&self.pending_path, &self.pending)
    }

    /// Dependency names not yet present in the completed history.
    ///
    /// Completion gating goes through this; it is public so callers can probe
    /// a task's readiness, and it is the seam where existence or cycle checks
    /// could be layered in. Dependencies on still-pending tasks simply show up
    /// as unmet, including self-references, which will block forever.
    pub fn unmet_dependencies(&self, dependencies: &[String]) -> Vec<String> {
        let completed: HashSet<&str> = self.history.iter().map(|t| t.name.as_str()).collect();
        dependencies
            .iter()
            .filter(|d| !completed.contains(d.as_str()))
            .cloned()
            .collect()
    }

    /// Complete a pending task, moving it to the history.
    ///
    /// Fails with `BlockedByDependencies` (carrying the unmet names) if any
    /// dependency has not been completed; the pending collection is unchanged
    /// in that case. On success both files are rewritten.
    pub fn complete(&mut self, name: &str) -> Result<(), TaskError> {
        let idx = self
            .pending
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| TaskError::NotFound(name.to_string()))?;
        let unmet = self.unmet_dependencies(&self.pending[idx].dependencies);
        if !unmet.is_empty() {
            return Err(TaskError::BlockedByDependencies(unmet));
        }
        let task = self.pending.remove(idx);
        self.history.push(task);
        db::save_tasks(&self.pending_path, &self.pending)?;
        db::save_tasks(&self.history_path, &self.history)
    }

    /// The single most urgent pending task, or `None` when nothing is pending.
    /// Ties break deterministically on (priority, due_date, name).
    pub fn highest_priority(&self) -> Option<&Task> {
        self.pending.iter().min_by_key(|t| t.priority_key())
    }

    /// Pending tasks sorted by the requested key. Empty when nothing is pending.
    pub fn list(&self, sort: SortKey) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.pending.iter().collect();
        match sort {
            SortKey::Priority => tasks.sort_by_key(|t| t.priority_key()),
            SortKey::Due => tasks.sort_by_key(|t| t.due_key()),
        }
        tasks
    }

    /// Pending tasks matching a filter criterion, in priority order.
    pub fn filter(&self, key: FilterKey, value: &str) -> Result<Vec<&Task>, TaskError> {
        let mut tasks: Vec<&Task> = match key {
            FilterKey::Priority => {
                let priority = parse_priority(value)?;
                self.pending.iter().filter(|t| t.priority == priority).collect()
            }
            FilterKey::Due => {
                let due = parse_due_date(value)?;
                self.pending.iter().filter(|t| t.due_date == due).collect()
            }
            FilterKey::Dependency => self
                .pending
                .iter()
                .filter(|t| t.dependencies.iter().any(|d| d == value))
                .collect(),
        };
        tasks.sort_by_key(|t| t.priority_key());
        Ok(tasks)
    }
}
