use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::query::Query;
use crate::store::TodoStore;

/// Append a note to a task. Notes keep their insertion order.
pub fn run<S: TodoStore>(store: &mut S, index: u32, note: String) -> Result<CmdResult> {
    if note.trim().is_empty() {
        return Err(TodoError::Api("Note cannot be empty".into()));
    }

    let existing = store
        .find_one(&Query::by_index(index))?
        .ok_or(TodoError::NotFound)?;

    let mut replacement = existing.clone();
    replacement.notes.push(note);
    let updated = store.update(&Query::by_id(existing.id), replacement)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note added to task ({}): {}",
        updated.index, updated.title
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
    fn notes_accumulate_in_order() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, TodoDraft::new("A")).unwrap();

        run(&mut store, 1, "first".into()).unwrap();
        run(&mut store, 1, "second".into()).unwrap();

        let item = store.find_one(&Query::by_index(1)).unwrap().unwrap();
        assert_eq!(item.notes, ["first", "second"]);
    }

    #[test]
    fn rejects_empty_note() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, TodoDraft::new("A")).unwrap();
        assert!(matches!(
            run(&mut store, 1, "  ".into()),
            Err(TodoError::Api(_))
        ));
    }
}
