//! The three task list operations: add, list, remove.
//!
//! Each operation works a full load/mutate/save cycle against the store
//! and returns data; all user-facing printing happens in the binary.

use crate::error::{Result, TaskError};
use crate::store::TaskStore;
use crate::task::Task;

/// Appends a task with the given description and saves the list.
///
/// Returns the appended record. No duplicate check, no length validation;
/// an empty description is stored as-is.
pub fn add(store: &TaskStore, description: &str) -> Result<Task> {
    let mut tasks = store.load();
    let task = Task::new(description);
    tasks.push(task.clone());
    store.save(&tasks)?;
    Ok(task)
}

/// Returns all tasks in stored order.
#[must_use]
pub fn list(store: &TaskStore) -> Vec<Task> {
    store.load()
}

/// Formats one list line: `<1-based position> - <description>`.
#[must_use]
pub fn format_entry(position: usize, task: &Task) -> String {
    format!("{} - {}", position, task.task)
}

/// Removes the task at a 1-based index and saves the list.
///
/// Out-of-range indices (including anything below 1) return
/// [`TaskError::InvalidIndex`] without touching the store.
pub fn remove(store: &TaskStore, index: i64) -> Result<Task> {
    let mut tasks = store.load();
    let len = tasks.len();

    if index < 1 || index as usize > len {
        return Err(TaskError::InvalidIndex { index, len });
    }

    let removed = tasks.remove(index as usize - 1);
    store.save(&tasks)?;
    Ok(removed)
}
