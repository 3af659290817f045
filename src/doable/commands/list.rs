use crate::commands::{CmdResult, TaskView};
use crate::error::Result;
use crate::query::Query;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &S) -> Result<CmdResult> {
    let items = store.find(&Query::all())?;
    let listed = items.into_iter().map(TaskView::derive).collect();
    Ok(CmdResult::default().with_listed(listed))
}
