//! `taskdeck delete` command.

use crate::persist::TaskFile;
use crate::store::TaskStore;

/// Execute the `delete` command, then flush the store to disk.
///
/// An unknown name is reported and the command still succeeds; nothing is
/// flushed in that case since nothing changed.
///
/// # Errors
///
/// Returns an error string when the flush fails.
pub fn run(store: &mut TaskStore, file: &TaskFile, name: &str) -> Result<(), String> {
    match store.delete(name) {
        Some(task) => {
            file.save(store.tasks())?;
            println!("Deleted '{}'.", task.name);
        }
        None => println!("Task not found."),
    }
    Ok(())
}
