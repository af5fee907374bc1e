//! `taskdeck edit` command.

use crate::commands::add::due_date_note;
use crate::persist::TaskFile;
use crate::store::{TaskFields, TaskStore};
use crate::task::normalize_tags;

/// Field values supplied on the command line; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct FieldPatch {
    /// New category, if given.
    pub category: Option<String>,
    /// New priority, if given.
    pub priority: Option<String>,
    /// New due date, if given.
    pub due: Option<String>,
    /// New status, if given.
    pub status: Option<String>,
    /// New raw comma-separated tags, if given; replaces the whole tag set.
    pub tags: Option<String>,
}

/// Execute the `edit` command, then flush the store to disk.
///
/// The patch is completed with the task's current values so the store always
/// receives the full non-identity field set. An unknown name is reported and
/// the command still succeeds.
///
/// # Errors
///
/// Returns an error string when the flush fails.
pub fn run(
    store: &mut TaskStore,
    file: &TaskFile,
    name: &str,
    patch: FieldPatch,
) -> Result<(), String> {
    let Some(current) = store.find(name) else {
        println!("Task not found.");
        return Ok(());
    };
    if let Some(due) = &patch.due {
        if let Some(note) = due_date_note(due) {
            println!("{note}");
        }
    }
    let fields = TaskFields {
        category: patch.category.unwrap_or_else(|| current.category.clone()),
        priority: patch.priority.unwrap_or_else(|| current.priority.clone()),
        due_date: patch.due.unwrap_or_else(|| current.due_date.clone()),
        status: patch.status.unwrap_or_else(|| current.status.clone()),
        tags: patch.tags.map_or_else(|| current.tags.clone(), |raw| normalize_tags(&raw)),
    };
    store.edit(name, fields);
    file.save(store.tasks())?;
    println!("Task updated.");
    Ok(())
}
