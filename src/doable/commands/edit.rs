use crate::commands::{CmdMessage, CmdResult, TaskUpdate};
use crate::error::{Result, TodoError};
use crate::query::Query;
use crate::store::TodoStore;

/// Write path: replaces title/description (and optionally the schedule) of
/// the task at `update.index`, preserving everything the store assigned.
pub fn run<S: TodoStore>(store: &mut S, update: TaskUpdate) -> Result<CmdResult> {
    if update.title.trim().is_empty() {
        return Err(TodoError::Api("Title cannot be empty".into()));
    }

    let existing = store
        .find_one(&Query::by_index(update.index))?
        .ok_or(TodoError::NotFound)?;

    let mut replacement = existing.clone();
    replacement.title = update.title;
    replacement.description = update.description;
    if update.cron_time.is_some() {
        replacement.cron_time = update.cron_time;
    }

    let updated = store.update(&Query::by_id(existing.id), replacement)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task updated ({}): {}",
        updated.index, updated.title
    )));
    result.affected.push(updated);
    Ok(result)
}
