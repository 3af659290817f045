use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::TodoDraft;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &mut S, draft: TodoDraft) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(TodoError::Api("Title cannot be empty".into()));
    }

    let item = store.insert(draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task added ({}): {}",
        item.index, item.title
    )));
    result.affected.push(item);
    Ok(result)
}
