//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers for the subcommands exposed by
//! the CLI. They are a thin shell: each one forwards already-collected input
//! to the store, prints the result, and maps errors to stderr with a nonzero
//! exit. All validation and state transitions live in `store`.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::TaskError;
use crate::fields::{FilterKey, SortKey};
use crate::store::TaskStore;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task name; must be unique among pending tasks.
        name: String,
        /// Integer priority. Lower number = higher priority.
        priority: String,
        /// Due date: YYYY-MM-DD.
        due: String,
        /// Dependency task name. May be repeated or comma-separated.
        #[arg(long = "dep")]
        deps: Vec<String>,
    },

    /// List pending tasks.
    List {
        /// Sort key.
        #[arg(long, value_enum, default_value_t = SortKey::Priority)]
        sort: SortKey,
    },

    /// Change the priority, due date, or dependencies of a pending task.
    Edit {
        /// Task name to edit.
        name: String,
        /// New integer priority.
        priority: String,
        /// New due date: YYYY-MM-DD.
        due: String,
        /// Replacement dependency name. May be repeated or comma-separated.
        /// Omitting this keeps the current dependencies.
        #[arg(long = "dep")]
        deps: Vec<String>,
        /// Remove all dependencies.
        #[arg(long, conflicts_with = "deps")]
        clear_deps: bool,
    },

    /// Mark a task completed and move it to the history.
    Complete {
        /// Task name to complete.
        name: String,
    },

    /// Show the single highest-priority pending task.
    Next,

    /// Show the completed-task history.
    History,

    /// Show pending tasks matching a criterion.
    Filter {
        /// Criterion: priority | due | dependency.
        #[arg(value_enum)]
        key: FilterKey,
        /// Value for the criterion (a priority number, a YYYY-MM-DD date,
        /// or a dependency task name).
        value: String,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Split repeated/comma-separated dependency arguments into clean names.
/// Names stay case-sensitive; only surrounding whitespace is trimmed.
pub fn split_deps(inputs: &[String]) -> Vec<String> {
    let mut deps = Vec::new();
    for raw in inputs {
        for part in raw.split(',') {
            let dep = part.trim();
            if !dep.is_empty() {
                deps.push(dep.to_string());
            }
        }
    }
    deps
}

fn fail(e: TaskError) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

/// Add a new task to the store.
pub fn cmd_add(store: &mut TaskStore, name: String, priority: String, due: String, deps: Vec<String>) {
    if let Err(e) = store.add(&name, &priority, &due, split_deps(&deps)) {
        fail(e);
    }
    println!("Added '{name}'.");
}

/// List pending tasks sorted by the chosen key.
pub fn cmd_list(store: &TaskStore, sort: SortKey) {
    let tasks = store.list(sort);
    if tasks.is_empty() {
        println!("No pending tasks.");
        return;
    }
    print_table(&tasks);
}

/// Edit a pending task in place.
pub fn cmd_edit(
    store: &mut TaskStore,
    name: String,
    priority: String,
    due: String,
    deps: Vec<String>,
    clear_deps: bool,
) {
    let new_deps = if clear_deps {
        Some(Vec::new())
    } else if deps.is_empty() {
        None
    } else {
        Some(split_deps(&deps))
    };
    if let Err(e) = store.edit(&name, &priority, &due, new_deps) {
        fail(e);
    }
    println!("Updated '{name}'.");
}

/// Complete a task, moving it to the history.
pub fn cmd_complete(store: &mut TaskStore, name: String) {
    if let Err(e) = store.complete(&name) {
        fail(e);
    }
    println!("Completed '{name}'.");
}

/// Print the highest-priority pending task.
pub fn cmd_next(store: &TaskStore) {
    match store.highest_priority() {
        Some(task) => print_table(&[task]),
        None => println!("No pending tasks."),
    }
}

/// Print the completed-task history, oldest first.
pub fn cmd_history(store: &TaskStore) {
    let history: Vec<&Task> = store.history().iter().collect();
    if history.is_empty() {
        println!("History is empty.");
        return;
    }
    print_table(&history);
}

/// Print pending tasks matching a filter criterion.
pub fn cmd_filter(store: &TaskStore, key: FilterKey, value: String) {
    match store.filter(key, &value) {
        Ok(tasks) if tasks.is_empty() => println!("No matching tasks."),
        Ok(tasks) => print_table(&tasks),
        Err(e) => fail(e),
    }
}

/// Generate shell completion script to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Print tasks in a formatted table.
fn print_table(tasks: &[&Task]) {
    println!("{:<5} {:<12} {:<30} {}", "Pri", "Due", "Name", "Dependencies");
    for t in tasks {
        let deps = if t.dependencies.is_empty() {
            "-".to_string()
        } else {
            t.dependencies.join(", ")
        };
        println!(
            "{:<5} {:<12} {:<30} {}",
            t.priority,
            t.due_date.format("%Y-%m-%d"),
            t.name,
            deps
        );
    }
}
