//! `taskdeck search` command.

use crate::store::TaskStore;

/// Execute the `search` command: exact-tag lookup, one line per hit.
///
/// # Errors
///
/// Never fails; the signature matches the other command handlers.
pub fn run(store: &TaskStore, tag: &str) -> Result<(), String> {
    let hits = store.search(tag);
    if hits.is_empty() {
        println!("No tasks carry tag '{tag}'.");
        return Ok(());
    }
    for task in hits {
        println!("{task}");
    }
    Ok(())
}
