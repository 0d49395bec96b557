//! Error taxonomy for task store operations.
//!
//! Every fallible operation reports one of these variants; none of them is
//! fatal to the process. Missing or corrupt persistence files are handled in
//! `db` by falling back to an empty collection and never surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    /// The priority was not an integer.
    #[error("priority must be an integer, got '{0}'")]
    InvalidPriority(String),

    /// The due date did not match YYYY-MM-DD.
    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A pending task with this name already exists.
    #[error("a pending task named '{0}' already exists")]
    DuplicateName(String),

    /// No pending task with this name.
    #[error("no pending task named '{0}'")]
    NotFound(String),

    /// Completion blocked: these dependency names are not in the history yet.
    #[error("blocked by incomplete dependencies: {}", .0.join(", "))]
    BlockedByDependencies(Vec<String>),

    /// Writing a persistence file failed. The in-memory state is still valid.
    #[error("could not write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
