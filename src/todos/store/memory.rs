use super::{BackupReport, TodoStore};
use crate::error::{Result, TodoError};
use crate::model::TodoList;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Option<TodoList>,
    backup: Option<TodoList>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list moved aside by the last successful backup
    pub fn backed_up(&self) -> Option<&TodoList> {
        self.backup.as_ref()
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self) -> Result<TodoList> {
        Ok(self.todos.clone().unwrap_or_default())
    }

    fn save(&mut self, todos: &TodoList) -> Result<()> {
        self.todos = Some(todos.clone());
        Ok(())
    }

    fn backup(&mut self) -> Result<BackupReport> {
        let todos = self
            .todos
            .take()
            .ok_or_else(|| TodoError::Backup("nothing to back up".to_string()))?;
        let todo_count = todos.len();
        self.backup = Some(todos);
        Ok(BackupReport {
            destination: PathBuf::from("memory://backup"),
            todo_count,
        })
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` pending to-dos titled "Todo 1", "Todo 2", ...
        pub fn with_todos(mut self, count: usize) -> Self {
            let mut todos = self.store.load().unwrap();
            for i in 0..count {
                todos.push(format!("Todo {}", i + 1), false).unwrap();
            }
            self.store.save(&todos).unwrap();
            self
        }

        pub fn with_done_todo(mut self, title: &str) -> Self {
            let mut todos = self.store.load().unwrap();
            todos.push(title.to_string(), true).unwrap();
            self.store.save(&todos).unwrap();
            self
        }
    }
}
