//! `taskdeck undo` command.

use crate::persist::TaskFile;
use crate::store::{TaskStore, UndoOutcome};

/// Execute the `undo` command, flushing when the store actually changed.
///
/// Every outcome is reported on stdout; none of them fails the command. As a
/// one-shot subcommand this always reports "Nothing to undo" because the
/// undo log lives only for the duration of a process.
///
/// # Errors
///
/// Returns an error string when the flush fails.
pub fn run(store: &mut TaskStore, file: &TaskFile) -> Result<(), String> {
    match store.undo() {
        UndoOutcome::RemovedAdded(name) => {
            file.save(store.tasks())?;
            println!("Undid add of '{name}'.");
        }
        UndoOutcome::RestoredDeleted(name) => {
            file.save(store.tasks())?;
            println!("Undid delete of '{name}'.");
        }
        UndoOutcome::AlreadyGone(name) => {
            println!("Task '{name}' is already gone; nothing to restore.");
        }
        UndoOutcome::NameTaken(name) => {
            println!("Cannot restore '{name}': that name is in use again.");
        }
        UndoOutcome::NothingToUndo => println!("Nothing to undo."),
    }
    Ok(())
}
