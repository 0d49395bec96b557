//! # taskq - priority task tracker CLI
//!
//! A small command-line task tracker: tasks carry an integer priority (lower
//! number = more urgent), a due date, and optional dependencies on other
//! tasks. Completing a task is gated on its dependencies already appearing in
//! the completed history.
//!
//! ## Quick start
//!
//! ```bash
//! # Add tasks
//! taskq add "Write report" 2 2025-03-01
//! taskq add "Submit report" 1 2025-03-05 --dep "Write report"
//!
//! # List by priority or due date
//! taskq list
//! taskq list --sort due
//!
//! # Complete, review history, query the most urgent task
//! taskq complete "Write report"
//! taskq history
//! taskq next
//! ```
//!
//! State lives in two JSON files, `tasks.json` (pending) and `history.json`
//! (completed), under `~/.taskq` or a directory passed via `--dir`. Both are
//! plain JSON arrays you can inspect or version-control.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use store::TaskStore;

fn main() {
    let cli = Cli::parse();

    // Completions need no store.
    if let Commands::Completions { shell } = &cli.command {
        cmd_completions(*shell);
        return;
    }

    let data_dir = cli.dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".taskq")
    });
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }

    let mut store = TaskStore::open(&data_dir.join("tasks.json"), &data_dir.join("history.json"));

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),

        Commands::Add { name, priority, due, deps } => cmd_add(&mut store, name, priority, due, deps),

        Commands::List { sort } => cmd_list(&store, sort),

        Commands::Edit { name, priority, due, deps, clear_deps } =>
            cmd_edit(&mut store, name, priority, due, deps, clear_deps),

        Commands::Complete { name } => cmd_complete(&mut store, name),

        Commands::Next => cmd_next(&store),

        Commands::History => cmd_history(&store),

        Commands::Filter { key, value } => cmd_filter(&store, key, value),
    }
}
