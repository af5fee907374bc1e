//! `taskdeck add` command.

use chrono::NaiveDate;

use crate::persist::TaskFile;
use crate::store::TaskStore;
use crate::task::Task;

/// Execute the `add` command, then flush the store to disk.
///
/// # Errors
///
/// Returns an error string when the name is already taken or the flush fails.
pub fn run(store: &mut TaskStore, file: &TaskFile, task: Task) -> Result<(), String> {
    if let Some(note) = due_date_note(&task.due_date) {
        println!("{note}");
    }
    store.add(task).map_err(|e| e.to_string())?;
    file.save(store.tasks())?;
    println!("Task added.");
    Ok(())
}

/// Advisory for due dates that do not parse as ISO dates.
///
/// Due dates are stored as entered either way; this only nudges the user.
pub(crate) fn due_date_note(due: &str) -> Option<String> {
    if NaiveDate::parse_from_str(due, "%Y-%m-%d").is_ok() {
        None
    } else {
        Some(format!("Note: due date '{due}' is not a YYYY-MM-DD date; storing it as entered."))
    }
}
