//! Persistence gateway for the task file.
//!
//! Tasks live in one JSON file holding an array of records. Every mutation
//! rewrites the whole file; there is no append or diffing. All I/O goes
//! through the `FileSystem` port so tests can swap in an in-memory
//! implementation.

use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;
use crate::task::Task;

/// Reads and writes the full task collection as a JSON file.
pub struct TaskFile<'a> {
    fs: &'a dyn FileSystem,
    path: PathBuf,
}

impl<'a> TaskFile<'a> {
    /// Creates a gateway for the task file at the given path.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, path: &Path) -> Self {
        Self { fs, path: path.to_path_buf() }
    }

    /// Path of the underlying task file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tasks from the file, in stored order.
    ///
    /// A missing file is not an error: it means a fresh start and yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or does not parse
    /// as a JSON task array.
    pub fn load(&self) -> Result<Vec<Task>, String> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let contents = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| format!("Failed to read task file {}: {e}", self.path.display()))?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse task file {}: {e}", self.path.display()))
    }

    /// Overwrites the file with the given tasks, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails; callers surface
    /// this rather than dropping the mutation silently.
    pub fn save(&self, tasks: &[Task]) -> Result<(), String> {
        let json = serde_json::to_string_pretty(tasks)
            .map_err(|e| format!("Failed to serialize tasks: {e}"))?;
        self.fs
            .write(&self.path, &json)
            .map_err(|e| format!("Failed to write task file {}: {e}", self.path.display()))
    }
}
