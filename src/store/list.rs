//! Ordered task collection.

use crate::store::StoreError;
use crate::task::Task;

/// Owns every task record, in insertion order.
///
/// New tasks always go to the end, edits keep their position, and removal
/// relinks neighbors in place. Lookup is a linear scan, which is fine for the
/// list sizes a single user produces.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateName`] if a task with the same name is
    /// already present. Names are the lookup key, so a duplicate would be
    /// unreachable by `find`, `remove`, and undo.
    pub fn append(&mut self, task: Task) -> Result<(), StoreError> {
        if self.find(&task.name).is_some() {
            return Err(StoreError::DuplicateName(task.name));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Returns the task with the given name, if present.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Returns a mutable reference to the task with the given name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.name == name)
    }

    /// Removes the task with the given name and returns it.
    ///
    /// Returns `None` when no task matches; the list is unchanged.
    pub fn remove(&mut self, name: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.name == name)?;
        Some(self.tasks.remove(pos))
    }

    /// Iterates over all tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// All tasks as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
