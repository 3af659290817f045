//! # API Facade
//!
//! A thin facade over the command layer — the single entry point for all
//! doable operations regardless of the UI in front of it. The facade
//! dispatches, it does not decide: business logic lives in `commands/*.rs`,
//! and nothing here touches stdout or the filesystem directly.
//!
//! `TodoApi<S: TodoStore>` is generic over the storage backend: production
//! wires in `FileStore`, tests use `InMemoryStore`. The entry point
//! constructs one instance and passes it around — there is no process-wide
//! store handle.

use crate::commands;
use crate::error::Result;
use crate::model::{TodoDraft, TodoStatus};
use crate::store::TodoStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, TaskUpdate, TaskView};

pub struct TodoApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_task(&mut self, draft: TodoDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_tasks(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_task(&self, index: u32) -> Result<CmdResult> {
        commands::show::run(&self.store, index)
    }

    pub fn edit_task(&mut self, update: TaskUpdate) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, update)
    }

    pub fn resolve_task(&mut self, index: u32) -> Result<CmdResult> {
        commands::resolve::run(&mut self.store, index, TodoStatus::Solved)
    }

    pub fn reopen_task(&mut self, index: u32) -> Result<CmdResult> {
        commands::resolve::run(&mut self.store, index, TodoStatus::Unsolved)
    }

    pub fn add_note(&mut self, index: u32, note: String) -> Result<CmdResult> {
        commands::note::run(&mut self.store, index, note)
    }

    pub fn remove_task(&mut self, index: u32) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> TodoApi<InMemoryStore> {
        TodoApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_then_list_dispatches() {
        let mut api = api();
        api.add_task(TodoDraft::new("Buy milk")).unwrap();
        let result = api.list_tasks().unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].item.title, "Buy milk");
    }

    #[test]
    fn show_returns_absence_as_message() {
        let api = api();
        let result = api.show_task(1).unwrap();
        assert!(result.listed.is_empty());
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn resolve_and_reopen_round_trip() {
        let mut api = api();
        api.add_task(TodoDraft::new("A")).unwrap();

        api.resolve_task(1).unwrap();
        assert_eq!(
            api.show_task(1).unwrap().listed[0].item.status,
            TodoStatus::Solved
        );

        api.reopen_task(1).unwrap();
        assert_eq!(
            api.show_task(1).unwrap().listed[0].item.status,
            TodoStatus::Unsolved
        );
    }

    #[test]
    fn edit_preserves_id() {
        let mut api = api();
        api.add_task(TodoDraft::new("Deploy")).unwrap();
        let before = api.show_task(1).unwrap().listed[0].item.clone();

        api.edit_task(TaskUpdate::new(1, "Deploy v2", "")).unwrap();

        let after = api.show_task(1).unwrap().listed[0].item.clone();
        assert_eq!(after.title, "Deploy v2");
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn remove_then_show_degrades() {
        let mut api = api();
        api.add_task(TodoDraft::new("A")).unwrap();
        api.remove_task(1).unwrap();
        assert!(api.show_task(1).unwrap().listed.is_empty());
    }
}
