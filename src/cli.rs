//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `taskdeck`.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Track tasks with tag search and undo")]
pub struct Cli {
    /// Path of the task file. Falls back to `TASKDECK_FILE`, then `tasks.json`.
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// The command to execute. Without one, the interactive menu starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task.
    Add {
        /// Task name; must not collide with an existing task.
        #[arg(long)]
        name: String,
        /// Category the task belongs to.
        #[arg(long)]
        category: String,
        /// Priority (High, Medium, Low).
        #[arg(long)]
        priority: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: String,
        /// Current status.
        #[arg(long)]
        status: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// List all tasks in the order they were added.
    View,
    /// Replace fields of an existing task; omitted flags keep their value.
    Edit {
        /// Name of the task to edit (the name itself cannot change).
        name: String,
        /// New category.
        #[arg(long)]
        category: Option<String>,
        /// New priority.
        #[arg(long)]
        priority: Option<String>,
        /// New due date.
        #[arg(long)]
        due: Option<String>,
        /// New status.
        #[arg(long)]
        status: Option<String>,
        /// New comma-separated tags, replacing the old set.
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a task by name.
    Delete {
        /// Name of the task to delete.
        name: String,
    },
    /// Revert the most recent add or delete.
    Undo,
    /// Find tasks carrying a tag (exact match).
    Search {
        /// Tag to look up.
        tag: String,
    },
    /// Run the interactive menu loop.
    Menu,
}
