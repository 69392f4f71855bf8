use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::store::TodoStore;
use tracing::info;

pub fn complete<S: TodoStore>(store: &mut S, ids: &[u64]) -> Result<CmdResult> {
    set_done(store, ids, true)
}

pub fn uncomplete<S: TodoStore>(store: &mut S, ids: &[u64]) -> Result<CmdResult> {
    set_done(store, ids, false)
}

fn set_done<S: TodoStore>(store: &mut S, ids: &[u64], done: bool) -> Result<CmdResult> {
    let mut todos = store.load()?;

    // Resolve everything first so an unknown id leaves the list untouched.
    if let Some(missing) = ids.iter().find(|id| todos.get(**id).is_none()) {
        return Err(TodoError::TodoNotFound(*missing));
    }

    let mut result = CmdResult::default();
    for id in ids {
        let Some(todo) = todos.get_mut(*id) else {
            continue;
        };
        let label = if done { "done" } else { "pending" };
        if todo.done == done {
            result.add_message(CmdMessage::info(format!(
                "To-do {} was already {}: {}",
                id, label, todo.title
            )));
        } else {
            todo.done = done;
            result.add_message(CmdMessage::success(format!(
                "To-do {} marked {}: {}",
                id, label, todo.title
            )));
        }
        result.affected_todos.push(todo.clone());
    }

    store.save(&todos)?;
    info!(?ids, done, "updated to-do status");
    Ok(result.with_listed_todos(todos.into_vec()))
}
