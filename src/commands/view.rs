//! `taskdeck view` command.

use crate::store::TaskStore;

/// Execute the `view` command: every task, one line each, in the order added.
///
/// # Errors
///
/// Never fails; the signature matches the other command handlers.
pub fn run(store: &TaskStore) -> Result<(), String> {
    if store.is_empty() {
        println!("No tasks yet.");
        return Ok(());
    }
    for task in store.tasks() {
        println!("{task}");
    }
    Ok(())
}
