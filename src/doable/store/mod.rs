//! # Storage Layer
//!
//! This module defines the storage abstraction for doable. The [`TodoStore`]
//! trait allows the application to work with different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole collection
//!   lives in one file, one JSON record per line, in insertion order.
//!   Flushes go through a temp file and an atomic rename, so a crash
//!   mid-write leaves the previous committed snapshot intact.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   persistence, fast isolated test execution.
//!
//! ## Matching
//!
//! Every operation that selects records does so through [`Query::matches`] —
//! there is exactly one matching rule in the system. `find` returns all
//! matches in persisted order; `find_one`, `update`, and `remove` operate on
//! the first match in that order.
//!
//! ## Index policy
//!
//! `insert` assigns `max(index of current records) + 1` (1 for an empty
//! store). Removal never renumbers survivors, so an index is reused only
//! once every later-created record has also been removed.
//!
//! ## Concurrency
//!
//! The CLI runs one command per process; each invocation opens, operates,
//! and closes the file. Two processes writing at once may race — a known
//! limitation, not something this layer defends against.

use crate::error::Result;
use crate::model::{TodoDraft, TodoItem};
use crate::query::Query;
use chrono::Utc;

pub mod fs;
pub mod memory;

/// Abstract interface for task storage.
pub trait TodoStore {
    /// All records matching `query`, in persisted order. The empty query
    /// matches everything; no match is an empty vec, not an error.
    fn find(&self, query: &Query) -> Result<Vec<TodoItem>>;

    /// The first record matching `query` in persisted order, if any.
    fn find_one(&self, query: &Query) -> Result<Option<TodoItem>>;

    /// Insert a draft, assigning a fresh `id` and the next `index`.
    fn insert(&mut self, draft: TodoDraft) -> Result<TodoItem>;

    /// Replace the first record matching `query` with `replacement`,
    /// preserving the record's `id`, `index`, and `created_at`. Fails with
    /// [`TodoError::NotFound`](crate::error::TodoError::NotFound) and leaves
    /// the store untouched when nothing matches.
    fn update(&mut self, query: &Query, replacement: TodoItem) -> Result<TodoItem>;

    /// Delete the first record matching `query` and return it. Surviving
    /// indices are not renumbered.
    fn remove(&mut self, query: &Query) -> Result<TodoItem>;
}

pub(crate) fn next_index(items: &[TodoItem]) -> u32 {
    items.iter().map(|t| t.index).max().unwrap_or(0) + 1
}

/// The one replacement rule both backends share: store-assigned fields win,
/// everything else comes from the replacement.
pub(crate) fn apply_replacement(existing: &TodoItem, replacement: TodoItem) -> TodoItem {
    TodoItem {
        id: existing.id,
        index: existing.index,
        created_at: existing.created_at,
        updated_at: Utc::now(),
        title: replacement.title,
        description: replacement.description,
        status: replacement.status,
        cron_time: replacement.cron_time,
        notes: replacement.notes,
    }
}
