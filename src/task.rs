//! Task record and tag normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tracked task.
///
/// All fields are free text. `priority` is expected to be one of
/// High/Medium/Low and `due_date` an ISO `YYYY-MM-DD` date, but neither is
/// validated here; the add flow only prints an advisory for odd dates.
/// Serde names match the on-disk record shape, which predates this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name, the unique key within a store.
    #[serde(rename = "task_name")]
    pub name: String,
    /// Category the task belongs to.
    #[serde(rename = "category_name")]
    pub category: String,
    /// Priority as entered (High, Medium, Low).
    pub priority: String,
    /// Due date as entered (expected `YYYY-MM-DD`).
    #[serde(rename = "duedate")]
    pub due_date: String,
    /// Current status as entered.
    pub status: String,
    /// Normalized tags, in the order first entered.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - Priority: {} - Due: {} - Status: {}",
            self.name, self.category, self.priority, self.due_date, self.status
        )
    }
}

/// Splits raw comma-separated tag input into a normalized tag list.
///
/// Each piece is trimmed, empties are dropped, and repeated tags keep only
/// their first occurrence so a task can appear at most once per index bucket.
#[must_use]
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let pieces: Vec<String> = raw.split(',').map(String::from).collect();
    normalize_tag_list(&pieces)
}

/// Applies tag normalization to an already-split tag list.
///
/// Task files can carry tag lists this tool did not produce (hand edits,
/// other tooling), so the load path runs stored tags through the same
/// trim/drop/dedupe rules as raw input.
#[must_use]
pub fn normalize_tag_list(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for piece in tags {
        let tag = piece.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
