use super::{apply_replacement, next_index, TodoStore};
use crate::error::{Result, TodoError};
use crate::model::{TodoDraft, TodoItem};
use crate::query::Query;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: one collection file, one JSON record per line.
///
/// Every operation loads the file, works on the in-memory records, and
/// flushes the whole collection back. Flushes write a sibling `.tmp` file
/// first and rename it over the collection, so readers never observe a
/// half-written record.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<TodoItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        let mut items = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            items.push(serde_json::from_str(line).map_err(TodoError::Serialization)?);
        }
        Ok(items)
    }

    fn flush(&self, items: &[TodoItem]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(TodoError::Io)?;
            }
        }

        let mut content = String::new();
        for item in items {
            content.push_str(&serde_json::to_string(item).map_err(TodoError::Serialization)?);
            content.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content).map_err(TodoError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TodoError::Io)?;
        Ok(())
    }
}

impl TodoStore for FileStore {
    fn find(&self, query: &Query) -> Result<Vec<TodoItem>> {
        let items = self.load()?;
        Ok(items.into_iter().filter(|t| query.matches(t)).collect())
    }

    fn find_one(&self, query: &Query) -> Result<Option<TodoItem>> {
        let items = self.load()?;
        Ok(items.into_iter().find(|t| query.matches(t)))
    }

    fn insert(&mut self, draft: TodoDraft) -> Result<TodoItem> {
        let mut items = self.load()?;
        let item = TodoItem::create(draft, next_index(&items));
        items.push(item.clone());
        self.flush(&items)?;
        Ok(item)
    }

    fn update(&mut self, query: &Query, replacement: TodoItem) -> Result<TodoItem> {
        let mut items = self.load()?;
        let pos = items
            .iter()
            .position(|t| query.matches(t))
            .ok_or(TodoError::NotFound)?;
        let updated = apply_replacement(&items[pos], replacement);
        items[pos] = updated.clone();
        self.flush(&items)?;
        Ok(updated)
    }

    fn remove(&mut self, query: &Query) -> Result<TodoItem> {
        let mut items = self.load()?;
        let pos = items
            .iter()
            .position(|t| query.matches(t))
            .ok_or(TodoError::NotFound)?;
        let removed = items.remove(pos);
        self.flush(&items)?;
        Ok(removed)
    }
}
