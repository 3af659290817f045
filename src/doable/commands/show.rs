use crate::commands::{CmdMessage, CmdResult, TaskView};
use crate::error::Result;
use crate::query::Query;
use crate::store::TodoStore;

/// Display path: a missing index degrades to an informational message
/// instead of an error.
pub fn run<S: TodoStore>(store: &S, index: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.find_one(&Query::by_index(index))? {
        Some(item) => result.listed.push(TaskView::derive(item)),
        None => result.add_message(CmdMessage::info("Nothing needs to do.")),
    }
    Ok(result)
}
