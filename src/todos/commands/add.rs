use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::store::TodoStore;
use tracing::info;

pub fn run<S: TodoStore>(store: &mut S, title: String, done: bool) -> Result<CmdResult> {
    if title.is_empty() {
        return Err(TodoError::Api("Empty to-dos are not allowed".into()));
    }

    let mut todos = store.load()?;
    let todo = todos.push(title, done)?.clone();
    store.save(&todos)?;
    info!(id = todo.id(), done, "added to-do");

    let mut result = CmdResult::default()
        .with_affected_todos(vec![todo])
        .with_listed_todos(todos.into_vec());
    result.add_message(CmdMessage::success("To-do added!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_pending_todo() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Buy milk".into(), false).unwrap();

        assert_eq!(result.affected_todos.len(), 1);
        let todos = store.load().unwrap();
        let last = todos.iter().last().unwrap();
        assert_eq!(last.title, "Buy milk");
        assert!(!last.done);
        assert_eq!(last.id(), 0);
    }

    #[test]
    fn appends_done_todo_at_end() {
        let mut store = StoreFixture::new().with_todos(2).store;
        run(&mut store, "Ship it".into(), true).unwrap();

        let todos = store.load().unwrap();
        assert_eq!(todos.len(), 3);
        let last = todos.iter().last().unwrap();
        assert_eq!(last.title, "Ship it");
        assert!(last.done);
        assert_eq!(last.id(), 2);
    }

    #[test]
    fn result_lists_whole_collection() {
        let mut store = StoreFixture::new().with_todos(1).store;
        let result = run(&mut store, "B".into(), false).unwrap();

        let titles: Vec<_> = result.listed_todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Todo 1", "B"]);
    }

    #[test]
    fn rejects_empty_title() {
        let mut store = InMemoryStore::new();
        assert!(matches!(run(&mut store, "".into(), false), Err(TodoError::Api(_))));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn whitespace_title_is_kept_verbatim() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  ".into(), false).unwrap();
        assert_eq!(store.load().unwrap().get(0).unwrap().title, "  ");
    }
}
