use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::TodoStatus;
use crate::query::Query;
use crate::store::TodoStore;

/// Set a task's status. Either value may be written at any time — the
/// two-state machine has no enforced transitions.
pub fn run<S: TodoStore>(store: &mut S, index: u32, status: TodoStatus) -> Result<CmdResult> {
    let existing = store
        .find_one(&Query::by_index(index))?
        .ok_or(TodoError::NotFound)?;

    let mut replacement = existing.clone();
    replacement.status = status;
    let updated = store.update(&Query::by_id(existing.id), replacement)?;

    let verb = match status {
        TodoStatus::Solved => "resolved",
        TodoStatus::Unsolved => "reopened",
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} ({}): {}",
        verb, updated.index, updated.title
    )));
    result.affected.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::TodoDraft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn resolves_and_reopens() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, TodoDraft::new("A")).unwrap();

        run(&mut store, 1, TodoStatus::Solved).unwrap();
        let item = store.find_one(&Query::by_index(1)).unwrap().unwrap();
        assert_eq!(item.status, TodoStatus::Solved);

        run(&mut store, 1, TodoStatus::Unsolved).unwrap();
        let item = store.find_one(&Query::by_index(1)).unwrap().unwrap();
        assert_eq!(item.status, TodoStatus::Unsolved);
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, TodoDraft::new("A")).unwrap();

        run(&mut store, 1, TodoStatus::Solved).unwrap();
        run(&mut store, 1, TodoStatus::Solved).unwrap();
        let item = store.find_one(&Query::by_index(1)).unwrap().unwrap();
        assert_eq!(item.status, TodoStatus::Solved);
    }

    #[test]
    fn missing_index_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, 3, TodoStatus::Solved),
            Err(TodoError::NotFound)
        ));
    }
}
