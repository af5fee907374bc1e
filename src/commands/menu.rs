//! Interactive menu loop.
//!
//! One store lives for the whole session, so undo works across the actions
//! taken in it; the one-shot subcommands cannot offer that. The loop reads
//! from any `BufRead` and writes to any `Write`, which is also how the tests
//! drive it.

use std::io::{BufRead, Write};

use crate::commands::add::due_date_note;
use crate::persist::TaskFile;
use crate::store::{TaskFields, TaskStore, UndoOutcome};
use crate::task::{normalize_tags, Task};

/// Run the menu loop until the user exits or input ends.
///
/// Exiting (choice 7 or end of input) saves the store one final time.
///
/// # Errors
///
/// Returns an error string when a flush fails or the input/output streams
/// break.
pub fn run(
    store: &mut TaskStore,
    file: &TaskFile,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    loop {
        show_menu(out)?;
        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            file.save(store.tasks())?;
            return Ok(());
        };
        match choice.as_str() {
            "1" => add_flow(store, file, input, out)?,
            "2" => view_flow(store, out)?,
            "3" => edit_flow(store, file, input, out)?,
            "4" => delete_flow(store, file, input, out)?,
            "5" => undo_flow(store, file, out)?,
            "6" => search_flow(store, input, out)?,
            "7" => {
                file.save(store.tasks())?;
                writeln!(out, "Tasks saved. Goodbye.").map_err(io_err)?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.").map_err(io_err)?,
        }
    }
}

fn show_menu(out: &mut dyn Write) -> Result<(), String> {
    writeln!(
        out,
        "\nMain Menu:\n\
         1. Add task\n\
         2. View tasks\n\
         3. Edit task\n\
         4. Delete task\n\
         5. Undo last add/delete\n\
         6. Search by tag\n\
         7. Save and exit"
    )
    .map_err(io_err)
}

fn add_flow(
    store: &mut TaskStore,
    file: &TaskFile,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    let Some(name) = prompt(input, out, "Task name: ")? else { return Ok(()) };
    let Some(category) = prompt(input, out, "Category: ")? else { return Ok(()) };
    let Some(priority) = prompt(input, out, "Priority (High, Medium, Low): ")? else {
        return Ok(());
    };
    let Some(due_date) = prompt(input, out, "Due date (YYYY-MM-DD): ")? else { return Ok(()) };
    let Some(status) = prompt(input, out, "Status: ")? else { return Ok(()) };
    let Some(raw_tags) = prompt(input, out, "Tags (comma-separated): ")? else { return Ok(()) };

    if let Some(note) = due_date_note(&due_date) {
        writeln!(out, "{note}").map_err(io_err)?;
    }
    let task =
        Task { name, category, priority, due_date, status, tags: normalize_tags(&raw_tags) };
    match store.add(task) {
        Ok(()) => {
            file.save(store.tasks())?;
            writeln!(out, "Task added.").map_err(io_err)
        }
        Err(err) => writeln!(out, "{err}").map_err(io_err),
    }
}

fn view_flow(store: &TaskStore, out: &mut dyn Write) -> Result<(), String> {
    if store.is_empty() {
        return writeln!(out, "No tasks yet.").map_err(io_err);
    }
    for task in store.tasks() {
        writeln!(out, "{task}").map_err(io_err)?;
    }
    Ok(())
}

fn edit_flow(
    store: &mut TaskStore,
    file: &TaskFile,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    let Some(name) = prompt(input, out, "Task name to edit: ")? else { return Ok(()) };
    let Some(current) = store.find(&name).cloned() else {
        return writeln!(out, "Task not found.").map_err(io_err);
    };
    writeln!(out, "Editing: {current}").map_err(io_err)?;
    writeln!(out, "Press Enter to keep the current value.").map_err(io_err)?;

    let category = prompt_or(input, out, "New category: ", &current.category)?;
    let priority = prompt_or(input, out, "New priority (High, Medium, Low): ", &current.priority)?;
    let due_date = prompt_or(input, out, "New due date (YYYY-MM-DD): ", &current.due_date)?;
    let status = prompt_or(input, out, "New status: ", &current.status)?;
    let Some(raw_tags) = prompt(input, out, "New tags (comma-separated): ")? else {
        return Ok(());
    };
    let tags = if raw_tags.is_empty() { current.tags } else { normalize_tags(&raw_tags) };

    if let Some(note) = due_date_note(&due_date) {
        writeln!(out, "{note}").map_err(io_err)?;
    }
    store.edit(&name, TaskFields { category, priority, due_date, status, tags });
    file.save(store.tasks())?;
    writeln!(out, "Task updated.").map_err(io_err)
}

fn delete_flow(
    store: &mut TaskStore,
    file: &TaskFile,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    let Some(name) = prompt(input, out, "Task name to delete: ")? else { return Ok(()) };
    match store.delete(&name) {
        Some(task) => {
            file.save(store.tasks())?;
            writeln!(out, "Deleted '{}'.", task.name).map_err(io_err)
        }
        None => writeln!(out, "Task not found.").map_err(io_err),
    }
}

fn undo_flow(store: &mut TaskStore, file: &TaskFile, out: &mut dyn Write) -> Result<(), String> {
    match store.undo() {
        UndoOutcome::RemovedAdded(name) => {
            file.save(store.tasks())?;
            writeln!(out, "Undid add of '{name}'.").map_err(io_err)
        }
        UndoOutcome::RestoredDeleted(name) => {
            file.save(store.tasks())?;
            writeln!(out, "Undid delete of '{name}'.").map_err(io_err)
        }
        UndoOutcome::AlreadyGone(name) => {
            writeln!(out, "Task '{name}' is already gone; nothing to restore.").map_err(io_err)
        }
        UndoOutcome::NameTaken(name) => {
            writeln!(out, "Cannot restore '{name}': that name is in use again.").map_err(io_err)
        }
        UndoOutcome::NothingToUndo => writeln!(out, "Nothing to undo.").map_err(io_err),
    }
}

fn search_flow(
    store: &TaskStore,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    let Some(tag) = prompt(input, out, "Tag to search: ")? else { return Ok(()) };
    let hits = store.search(&tag);
    if hits.is_empty() {
        return writeln!(out, "No tasks carry tag '{tag}'.").map_err(io_err);
    }
    for task in hits {
        writeln!(out, "{task}").map_err(io_err)?;
    }
    Ok(())
}

/// Prints a prompt and reads one trimmed line. `None` means input ended.
fn prompt(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
) -> Result<Option<String>, String> {
    write!(out, "{label}").map_err(io_err)?;
    out.flush().map_err(io_err)?;
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(io_err)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but an empty answer (or end of input) keeps `current`.
fn prompt_or(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
    current: &str,
) -> Result<String, String> {
    match prompt(input, out, label)? {
        Some(answer) if !answer.is_empty() => Ok(answer),
        _ => Ok(current.to_string()),
    }
}

fn io_err(e: std::io::Error) -> String {
    format!("I/O error: {e}")
}
