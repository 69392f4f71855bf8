use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &S) -> Result<CmdResult> {
    let todos = store.load()?;
    let mut result = CmdResult::default();
    if todos.is_empty() {
        result.add_message(CmdMessage::info("No to-dos yet."));
    }
    Ok(result.with_listed_todos(todos.into_vec()))
}
