use super::{apply_replacement, next_index, TodoStore};
use crate::error::{Result, TodoError};
use crate::model::{TodoDraft, TodoItem};
use crate::query::Query;

/// In-memory store for tests. Same semantics as the file store, no disk.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<TodoItem>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for InMemoryStore {
    fn find(&self, query: &Query) -> Result<Vec<TodoItem>> {
        Ok(self
            .items
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect())
    }

    fn find_one(&self, query: &Query) -> Result<Option<TodoItem>> {
        Ok(self.items.iter().find(|t| query.matches(t)).cloned())
    }

    fn insert(&mut self, draft: TodoDraft) -> Result<TodoItem> {
        let item = TodoItem::create(draft, next_index(&self.items));
        self.items.push(item.clone());
        Ok(item)
    }

    fn update(&mut self, query: &Query, replacement: TodoItem) -> Result<TodoItem> {
        let pos = self
            .items
            .iter()
            .position(|t| query.matches(t))
            .ok_or(TodoError::NotFound)?;
        let updated = apply_replacement(&self.items[pos], replacement);
        self.items[pos] = updated.clone();
        Ok(updated)
    }

    fn remove(&mut self, query: &Query) -> Result<TodoItem> {
        let pos = self
            .items
            .iter()
            .position(|t| query.matches(t))
            .ok_or(TodoError::NotFound)?;
        Ok(self.items.remove(pos))
    }
}
