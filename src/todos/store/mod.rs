//! # Storage Layer
//!
//! The [`TodoStore`] trait is the persistence seam. Every command loads the
//! whole list, mutates it in memory and saves it back in full.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single JSON document
//!   - Missing or empty document reads as an empty list
//!   - Unparsable document is reported as [`TodoError::Corrupt`](crate::error::TodoError::Corrupt)
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! There is no locking between processes: two invocations racing on the same
//! document resolve as last writer wins.

use crate::error::Result;
use crate::model::TodoList;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Outcome of a successful backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Where the document now lives.
    pub destination: PathBuf,
    /// Number of to-dos in the moved document.
    pub todo_count: usize,
}

/// Abstract interface for to-do storage.
pub trait TodoStore {
    /// Load the full list. An absent document is an empty list.
    fn load(&self) -> Result<TodoList>;

    /// Replace the stored list with `todos`.
    fn save(&mut self, todos: &TodoList) -> Result<()>;

    /// Move the stored document into the backup location, leaving the working
    /// list empty.
    fn backup(&mut self) -> Result<BackupReport>;

    /// Human readable description of where the list is kept
    fn location(&self) -> String;
}
