use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::Query;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &mut S, index: u32) -> Result<CmdResult> {
    let removed = store.remove(&Query::by_index(index))?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task removed ({}): {}",
        removed.index, removed.title
    )));
    result.affected.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::TodoError;
    use crate::model::TodoDraft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_by_index() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, TodoDraft::new("A")).unwrap();
        add::run(&mut store, TodoDraft::new("B")).unwrap();

        run(&mut store, 1).unwrap();
        let remaining = store.find(&Query::all()).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "B");
        assert_eq!(remaining[0].index, 2);
    }

    #[test]
    fn missing_index_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(run(&mut store, 5), Err(TodoError::NotFound)));
    }
}
