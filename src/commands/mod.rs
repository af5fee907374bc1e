//! Command dispatch and handlers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod menu;
pub mod search;
pub mod undo;
pub mod view;

use std::env;
use std::path::PathBuf;

use crate::adapters::live::LiveFileSystem;
use crate::cli::{Cli, Command};
use crate::persist::TaskFile;
use crate::store::TaskStore;
use crate::task::{normalize_tags, Task};

/// Dispatch a parsed command to its handler.
///
/// Loads the task file into a fresh store first; the undo log always starts
/// empty, so one-shot invocations have nothing to undo. Without a subcommand
/// the interactive menu runs.
///
/// # Errors
///
/// Returns an error string when the task file cannot be loaded or the
/// selected command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), String> {
    let fs = LiveFileSystem;
    let path = store_path(cli.file);
    let file = TaskFile::new(&fs, &path);
    let tasks = file.load()?;
    let mut store = TaskStore::from_tasks(tasks)
        .map_err(|e| format!("Task file {}: {e}", file.path().display()))?;

    // Names and tags are identity keys; trim them here so flag values and
    // menu-prompted answers agree on the same input.
    match cli.command.unwrap_or(Command::Menu) {
        Command::Add { name, category, priority, due, status, tags } => {
            let task = Task {
                name: name.trim().to_string(),
                category,
                priority,
                due_date: due,
                status,
                tags: normalize_tags(&tags),
            };
            add::run(&mut store, &file, task)
        }
        Command::View => view::run(&store),
        Command::Edit { name, category, priority, due, status, tags } => {
            let patch = edit::FieldPatch { category, priority, due, status, tags };
            edit::run(&mut store, &file, name.trim(), patch)
        }
        Command::Delete { name } => delete::run(&mut store, &file, name.trim()),
        Command::Undo => undo::run(&mut store, &file),
        Command::Search { tag } => search::run(&store, tag.trim()),
        Command::Menu => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            menu::run(&mut store, &file, &mut stdin.lock(), &mut stdout.lock())
        }
    }
}

/// Resolves the task file path: `--file` flag, then `TASKDECK_FILE`, then
/// `tasks.json` in the working directory.
fn store_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var("TASKDECK_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("tasks.json"))
}
