//! In-memory data layer: ordered task list, tag index, and undo log.
//!
//! [`TaskStore`] owns the three structures and keeps them in sync: every
//! list mutation is mirrored into the index before control returns, and
//! every add/delete pushes its inverse onto the undo log. Callers never
//! touch the list or index directly.

mod index;
mod list;
mod undo;

pub use index::TagIndex;
pub use list::TaskList;
pub use undo::{UndoAction, UndoLog};

use thiserror::Error;

use crate::task::Task;

/// Errors from store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A task with this name already exists; names are the lookup key.
    #[error("a task named `{0}` already exists")]
    DuplicateName(String),
}

/// Replacement values for every task field except the name.
///
/// Edits swap in the whole set at once; the name is the task's identity and
/// never changes.
#[derive(Debug, Clone)]
pub struct TaskFields {
    /// New category.
    pub category: String,
    /// New priority.
    pub priority: String,
    /// New due date.
    pub due_date: String,
    /// New status.
    pub status: String,
    /// New normalized tag list.
    pub tags: Vec<String>,
}

/// Result of a [`TaskStore::undo`] call.
///
/// Only the first two variants change state; the rest report why nothing
/// happened, none of them fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent add was reverted; the named task was removed.
    RemovedAdded(String),
    /// The most recent delete was reverted; the named task was re-inserted.
    RestoredDeleted(String),
    /// The logged add pointed at a task that was since deleted by hand.
    AlreadyGone(String),
    /// The logged delete could not be re-inserted; the name is in use again.
    NameTaken(String),
    /// The undo log is empty.
    NothingToUndo,
}

/// The task collection, its tag index, and the undo log, as one unit.
#[derive(Debug, Default)]
pub struct TaskStore {
    list: TaskList,
    index: TagIndex,
    undo_log: UndoLog,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously persisted tasks.
    ///
    /// Rebuilds the tag index from scratch; the undo log starts empty, as it
    /// never survives a restart. Stored tag lists are re-normalized first,
    /// since a hand-edited file can carry duplicates that would otherwise
    /// index the same task twice under one tag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateName`] when two records share a name,
    /// which means the task file was edited or corrupted outside this tool.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for mut task in tasks {
            task.tags = crate::task::normalize_tag_list(&task.tags);
            store.insert(task)?;
        }
        Ok(store)
    }

    /// Adds a task to the end of the collection and records the add.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateName`] if the name is taken.
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        let name = task.name.clone();
        self.insert(task)?;
        self.undo_log.record_add(name);
        Ok(())
    }

    /// Replaces every non-identity field of the named task.
    ///
    /// The task keeps its position in the collection. The index entry is
    /// removed under the pre-edit tag set before the fields change, then
    /// rebuilt from the new one. Edits are not undoable.
    ///
    /// Returns the updated task, or `None` when no task has that name.
    pub fn edit(&mut self, name: &str, fields: TaskFields) -> Option<Task> {
        let before = self.list.find(name)?.clone();
        self.index.unindex(&before);
        let task = self.list.find_mut(name)?;
        task.category = fields.category;
        task.priority = fields.priority;
        task.due_date = fields.due_date;
        task.status = fields.status;
        task.tags = fields.tags;
        let updated = task.clone();
        self.index.index(&updated);
        Some(updated)
    }

    /// Removes the named task, unindexes it, and records the delete.
    ///
    /// Returns the removed task, or `None` when no task has that name.
    pub fn delete(&mut self, name: &str) -> Option<Task> {
        let task = self.list.remove(name)?;
        self.index.unindex(&task);
        self.undo_log.record_delete(task.clone());
        Some(task)
    }

    /// Reverts the most recent add or delete.
    ///
    /// Each call unwinds exactly one logged action; calling again keeps
    /// unwinding older ones. A logged entry is consumed even when it can no
    /// longer be applied (see [`UndoOutcome`]).
    pub fn undo(&mut self) -> UndoOutcome {
        match self.undo_log.pop() {
            None => UndoOutcome::NothingToUndo,
            Some(UndoAction::Added(name)) => match self.list.remove(&name) {
                Some(task) => {
                    self.index.unindex(&task);
                    UndoOutcome::RemovedAdded(name)
                }
                None => UndoOutcome::AlreadyGone(name),
            },
            Some(UndoAction::Deleted(task)) => {
                let name = task.name.clone();
                match self.insert(task) {
                    Ok(()) => UndoOutcome::RestoredDeleted(name),
                    Err(StoreError::DuplicateName(_)) => UndoOutcome::NameTaken(name),
                }
            }
        }
    }

    /// Tasks carrying the given tag, in indexing order. Exact match only.
    #[must_use]
    pub fn search(&self, tag: &str) -> Vec<&Task> {
        self.index.search(tag).iter().filter_map(|name| self.list.find(name)).collect()
    }

    /// Returns the named task, if present.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Task> {
        self.list.find(name)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.list.as_slice()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Appends to the collection, then mirrors the stored copy into the
    /// index. No undo entry; callers record one when appropriate.
    fn insert(&mut self, task: Task) -> Result<(), StoreError> {
        let name = task.name.clone();
        self.list.append(task)?;
        if let Some(stored) = self.list.find(&name) {
            self.index.index(stored);
        }
        Ok(())
    }
}
