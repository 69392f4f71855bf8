//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every to-do operation, whichever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (e.g. parsing to-do references into ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! `TodoApi<S: TodoStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, TodoError};
use crate::store::TodoStore;

/// The main API facade for to-do operations.
pub struct TodoApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_todo(&mut self, title: String, done: bool) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, done)
    }

    pub fn list_todos(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn complete_todos<I: AsRef<str>>(&mut self, refs: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(refs)?;
        commands::status::complete(&mut self.store, &ids)
    }

    pub fn uncomplete_todos<I: AsRef<str>>(
        &mut self,
        refs: &[I],
    ) -> Result<commands::CmdResult> {
        let ids = parse_ids(refs)?;
        commands::status::uncomplete(&mut self.store, &ids)
    }

    pub fn backup(&mut self) -> Result<commands::CmdResult> {
        commands::backup::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Interprets the `add --status` flag: only the literal `true` marks a to-do done.
pub fn parse_status(status: Option<&str>) -> bool {
    status == Some("true")
}

fn parse_ids<I: AsRef<str>>(refs: &[I]) -> Result<Vec<u64>> {
    if refs.is_empty() {
        return Err(TodoError::Api("No to-do given".into()));
    }
    refs.iter()
        .map(|r| {
            let r = r.as_ref().trim();
            r.parse::<u64>()
                .map_err(|_| TodoError::Api(format!("Invalid to-do id: {}", r)))
        })
        .collect()
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
