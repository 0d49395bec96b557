//! Field enums shared between the CLI surface and the store.

use clap::ValueEnum;

/// Available sorting options for the pending-task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Ascending (priority, due_date, name).
    Priority,
    /// Ascending (due_date, priority, name).
    Due,
}

/// Filtering criteria for pending tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKey {
    /// Tasks with exactly this priority.
    Priority,
    /// Tasks due on exactly this date.
    Due,
    /// Tasks that list this name as a dependency.
    Dependency,
}
