//! JSON persistence for task collections.
//!
//! Each collection (pending tasks, completed history) lives in its own file as
//! a plain JSON array of task objects. Loading is deliberately tolerant: a
//! missing or unparseable file is treated as an empty collection so a first
//! run (or a half-written file from a crash) never blocks startup. Saving
//! rewrites the whole file in place; the tolerant load path is the mitigation
//! for a torn write, not an atomic rename.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::error::TaskError;
use crate::task::Task;

/// Load a task list from a JSON file, falling back to empty on any problem.
pub fn load_tasks(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }
    let mut buf = String::new();
    match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
        Ok(_) => match serde_json::from_str(&buf) {
            Ok(tasks) => tasks,
            Err(e) => {
                eprintln!("Error parsing {}, starting fresh: {e}", path.display());
                Vec::new()
            }
        },
        Err(e) => {
            eprintln!("Error reading {}, starting fresh: {e}", path.display());
            Vec::new()
        }
    }
}

/// Serialize a task list to a JSON file, overwriting it wholesale.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskError> {
    let persist = |path: &Path| -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(tasks)?;
        fs::write(path, data)
    };
    persist(path).map_err(|source| TaskError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(name: &str, priority: i64, due: &str) -> Task {
        Task {
            priority,
            due_date: NaiveDate::parse_from_str(due, "%Y-%m-%d").unwrap(),
            name: name.to_string(),
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_tasks(&dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json!").unwrap();
        assert!(load_tasks(&path).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let tasks = vec![
            Task {
                dependencies: vec!["Write report".into()],
                ..task("Submit report", 1, "2025-03-05")
            },
            task("Write report", 2, "2025-03-01"),
        ];
        save_tasks(&path, &tasks).unwrap();
        assert_eq!(load_tasks(&path), tasks);
    }

    #[test]
    fn due_date_persists_as_plain_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        save_tasks(&path, &[task("Write report", 2, "2025-03-01")]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"due_date\": \"2025-03-01\""));
    }

    #[test]
    fn missing_dependencies_field_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[{"priority": 3, "due_date": "2025-04-01", "name": "Plan sprint"}]"#,
        )
        .unwrap();
        let tasks = load_tasks(&path);
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].dependencies.is_empty());
    }
}
