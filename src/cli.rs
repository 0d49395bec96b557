use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed task tracker CLI.
/// Storage defaults to ~/.taskq or a directory passed via --dir.
#[derive(Parser)]
#[command(name = "taskq", version, about = "Priority-ordered task tracker with dependency gating")]
pub struct Cli {
    /// Directory holding the tasks.json and history.json files.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
