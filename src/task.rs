//! The task record stored on disk.

use serde::{Deserialize, Serialize};

/// A single entry in the task list.
///
/// Serializes to the on-disk object shape `{ "task": "<description>" }`.
/// The field is defaulted on decode so an object missing it becomes an
/// empty description instead of failing the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// The task description.
    #[serde(default)]
    pub task: String,
}

impl Task {
    /// Creates a task record from a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            task: description.into(),
        }
    }
}
