//! The closed filter grammar used to select tasks.
//!
//! A [`Query`] is a conjunction of `(Field, Value)` clauses. A record matches
//! when every clause matches: the named field exists on the record and equals
//! the literal exactly. There is no partial or fuzzy matching, and a clause
//! that cannot apply (absent field, mismatched literal type) makes the record
//! not match — it is never an error.
//!
//! Matching is pure, so `find`, `find_one`, `update`, and `remove` all share
//! the same rule.

use crate::model::{TodoItem, TodoStatus};
use uuid::Uuid;

/// Queryable fields of a task. A closed set by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Index,
    Title,
    Status,
    CronTime,
}

/// Literal values a clause can compare against.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Id(Uuid),
    Int(i64),
    Text(String),
    Status(TodoStatus),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<(Field, Value)>,
}

impl Query {
    /// The empty query. Matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: Uuid) -> Self {
        Self::all().with(Field::Id, Value::Id(id))
    }

    pub fn by_index(index: u32) -> Self {
        Self::all().with(Field::Index, Value::Int(i64::from(index)))
    }

    pub fn by_status(status: TodoStatus) -> Self {
        Self::all().with(Field::Status, Value::Status(status))
    }

    pub fn with(mut self, field: Field, value: Value) -> Self {
        self.clauses.push((field, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True iff every clause matches `item`.
    pub fn matches(&self, item: &TodoItem) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| clause_matches(item, *field, value))
    }
}

fn clause_matches(item: &TodoItem, field: Field, value: &Value) -> bool {
    match (field, value) {
        (Field::Id, Value::Id(id)) => item.id == *id,
        (Field::Index, Value::Int(n)) => i64::from(item.index) == *n,
        (Field::Title, Value::Text(t)) => item.title == *t,
        (Field::Status, Value::Status(s)) => item.status == *s,
        // A task with no schedule has no CronTime field to compare
        (Field::CronTime, Value::Text(t)) => item.cron_time.as_deref() == Some(t.as_str()),
        _ => false,
    }
}
