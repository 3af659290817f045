use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task state. A task is either open or resolved; any edit may set either
/// value directly, the store does not police transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Unsolved,
    Solved,
}

impl TodoStatus {
    pub fn is_solved(self) -> bool {
        matches!(self, TodoStatus::Solved)
    }
}

/// One task as persisted by the store.
///
/// `id` and `index` are store-assigned and immutable; everything else is
/// caller data. Unknown fields in the on-disk representation are rejected
/// at parse time rather than carried along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoItem {
    pub id: Uuid,
    pub index: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TodoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Materialize a draft into a full record. Only the store calls this —
    /// it owns index assignment.
    pub fn create(draft: TodoDraft, index: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            index,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            cron_time: draft.cron_time,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Caller-supplied fields for a task about to be inserted.
#[derive(Debug, Clone, Default)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub cron_time: Option<String>,
    pub notes: Vec<String>,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_schedule(mut self, cron_time: impl Into<String>) -> Self {
        self.cron_time = Some(cron_time.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_unsolved() {
        assert_eq!(TodoStatus::default(), TodoStatus::Unsolved);
        assert!(!TodoStatus::default().is_solved());
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let draft = TodoDraft::new("Buy milk").with_description("2% please");
        let item = TodoItem::create(draft, 1);
        assert_eq!(item.index, 1);
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.status, TodoStatus::Unsolved);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn description_newlines_survive_serde() {
        let draft = TodoDraft::new("Deploy").with_description("step one\nstep two\n");
        let item = TodoItem::create(draft, 3);
        let line = serde_json::to_string(&item).unwrap();
        // One logical record per line: the encoded form must stay single-line
        assert!(!line.contains('\n'));
        let back: TodoItem = serde_json::from_str(&line).unwrap();
        assert_eq!(back, item);
        assert_eq!(back.description, "step one\nstep two\n");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let item = TodoItem::create(TodoDraft::new("A"), 1);
        let mut value: serde_json::Value = serde_json::to_value(&item).unwrap();
        value["priority"] = serde_json::json!("high");
        let parsed: std::result::Result<TodoItem, _> = serde_json::from_value(value);
        assert!(parsed.is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TodoStatus::Unsolved).unwrap(),
            "\"unsolved\""
        );
        assert_eq!(
            serde_json::to_string(&TodoStatus::Solved).unwrap(),
            "\"solved\""
        );
    }
}
