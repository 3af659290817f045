use crate::model::TodoItem;
use crate::status::{self, ColorToken, SymbolToken};

pub mod add;
pub mod edit;
pub mod list;
pub mod note;
pub mod remove;
pub mod resolve;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A task plus everything the presentation layer needs to render it, already
/// derived: the deadline string, semantic color/symbol tokens, and the
/// script-resolved flag. The CLI maps tokens to ANSI; nothing in here is
/// terminal-specific.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub item: TodoItem,
    pub deadline: String,
    pub color: ColorToken,
    pub symbol: SymbolToken,
    pub script_resolved: bool,
}

impl TaskView {
    pub fn derive(item: TodoItem) -> Self {
        let deadline = status::format_deadline(item.cron_time.as_deref());
        let color = status::color_of(&item);
        let symbol = status::symbol_of(&item);
        let script_resolved = status::script_resolved(&item);
        Self {
            item,
            deadline,
            color,
            symbol,
            script_resolved,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<TodoItem>,
    pub listed: Vec<TaskView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<TaskView>) -> Self {
        self.listed = listed;
        self
    }
}

/// Replacement fields for an edit. `cron_time: None` keeps the existing
/// schedule.
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub index: u32,
    pub title: String,
    pub description: String,
    pub cron_time: Option<String>,
}

impl TaskUpdate {
    pub fn new(index: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            description: description.into(),
            cron_time: None,
        }
    }

    pub fn with_schedule(mut self, cron_time: impl Into<String>) -> Self {
        self.cron_time = Some(cron_time.into());
        self
    }
}
