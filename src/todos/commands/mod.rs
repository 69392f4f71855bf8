//! # Command Layer
//!
//! One module per operation. Each command takes a store, performs a single
//! load, mutate, save cycle and returns a [`CmdResult`] describing what
//! happened. Nothing here prints.

use crate::model::Todo;
use crate::store::BackupReport;

pub mod add;
pub mod backup;
pub mod list;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// To-dos created or changed by the command
    pub affected_todos: Vec<Todo>,
    /// Full list to display after the command, in insertion order
    pub listed_todos: Vec<Todo>,
    pub backup: Option<BackupReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_backup(mut self, report: BackupReport) -> Self {
        self.backup = Some(report);
        self
    }
}
