//! Port traits for external boundaries.

pub mod filesystem;
