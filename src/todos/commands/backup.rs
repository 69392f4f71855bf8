use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;

/// Moves the stored list aside. The working list is empty afterwards.
pub fn run<S: TodoStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.backup()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Backup done! To-dos reset."));
    result.add_message(CmdMessage::info(format!(
        "{} to-do(s) saved to {}",
        report.todo_count,
        report.destination.display()
    )));
    Ok(result.with_backup(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn backup_resets_working_list() {
        let mut store = StoreFixture::new().with_todos(2).store;
        let before = store.load().unwrap();

        let result = run(&mut store).unwrap();

        assert_eq!(result.backup.as_ref().unwrap().todo_count, 2);
        assert_eq!(store.backed_up(), Some(&before));
        assert!(list::run(&store).unwrap().listed_todos.is_empty());
    }

    #[test]
    fn backup_of_nothing_fails() {
        let mut store = InMemoryStore::new();
        assert!(matches!(run(&mut store), Err(TodoError::Backup(_))));
    }
}
