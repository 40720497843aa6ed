//! File-backed persistence for the task list.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, TaskError};
use crate::task::Task;

/// Default task list file name.
pub const TASKS_FILENAME: &str = "tasks.json";

/// Persistence boundary for the task list.
///
/// Owns the file path and performs whole-file load/save: the entire list
/// is decoded on every read and rewritten on every mutation. There is no
/// locking; concurrent invocations race and the last writer wins.
#[derive(Debug, Clone)]
pub struct TaskStore {
    /// Path of the JSON file holding the task array.
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store over an explicit file path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks if the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the full task list.
    ///
    /// A missing file means no tasks yet. An unreadable or undecodable
    /// file is also treated as empty; the failure is logged but never
    /// surfaced to the caller, and the file is left untouched.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read task file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(
                    "Task file {} is not a valid task array, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Serializes the given tasks and overwrites the file in full.
    ///
    /// The write is not atomic: a crash mid-write may leave a truncated
    /// file, which the next `load` treats as empty.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json).map_err(|e| {
            TaskError::store_with_path(format!("failed to write task file: {e}"), self.path.clone())
        })?;
        Ok(())
    }
}
