//! Undo log for add and delete actions.

use crate::task::Task;

/// Inverse of a completed mutation, recorded at mutation time.
///
/// Edits are deliberately not recorded; only adds and deletes can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// A task with this name was added; undoing removes it.
    Added(String),
    /// This task was deleted; undoing re-inserts the snapshot.
    Deleted(Task),
}

/// LIFO log of reversible actions.
///
/// Lives only in memory; a fresh process starts with an empty log no matter
/// what the task file contains.
#[derive(Debug, Default)]
pub struct UndoLog {
    actions: Vec<UndoAction>,
}

impl UndoLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a task with this name was just added.
    pub fn record_add(&mut self, name: String) {
        self.actions.push(UndoAction::Added(name));
    }

    /// Records a just-deleted task so it can be re-inserted.
    pub fn record_delete(&mut self, task: Task) {
        self.actions.push(UndoAction::Deleted(task));
    }

    /// Pops the most recent action, or `None` when nothing is left to undo.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    /// Returns `true` when there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str) -> Task {
        Task {
            name: name.to_string(),
            category: "General".into(),
            priority: "Low".into(),
            due_date: "2024-01-01".into(),
            status: "Pending".into(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn pop_returns_actions_most_recent_first() {
        let mut log = UndoLog::new();
        log.record_add("one".into());
        log.record_delete(task("two"));
        assert_eq!(log.pop(), Some(UndoAction::Deleted(task("two"))));
        assert_eq!(log.pop(), Some(UndoAction::Added("one".into())));
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn empty_log_pops_none() {
        let mut log = UndoLog::new();
        assert!(log.is_empty());
        assert_eq!(log.pop(), None);
    }
}
