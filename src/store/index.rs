//! Tag index for exact-tag search.

use std::collections::HashMap;

use crate::task::Task;

/// Maps each tag to the names of the tasks carrying it.
///
/// The index never owns task records; buckets hold task names that resolve
/// against the owning [`TaskList`](crate::store::TaskList). Each bucket keeps
/// insertion order, and a bucket whose last entry is removed is dropped.
#[derive(Debug, Default)]
pub struct TagIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl TagIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the task's name to the bucket of every tag it carries.
    ///
    /// Buckets are created on first use. Callers must not index the same
    /// task twice without an `unindex` in between.
    pub fn index(&mut self, task: &Task) {
        for tag in &task.tags {
            self.buckets.entry(tag.clone()).or_default().push(task.name.clone());
        }
    }

    /// Removes the task's name from the bucket of every tag it carries.
    ///
    /// Must be called with the tag set the task had when it was indexed; on
    /// edit that means unindexing with the pre-edit tags before mutating.
    pub fn unindex(&mut self, task: &Task) {
        for tag in &task.tags {
            if let Some(bucket) = self.buckets.get_mut(tag) {
                bucket.retain(|name| name != &task.name);
                if bucket.is_empty() {
                    self.buckets.remove(tag);
                }
            }
        }
    }

    /// Names of the tasks carrying the given tag, in indexing order.
    ///
    /// Unknown tags yield an empty slice. Exact match only.
    #[must_use]
    pub fn search(&self, tag: &str) -> &[String] {
        self.buckets.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` when no bucket exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
