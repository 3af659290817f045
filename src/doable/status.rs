//! Status derivation: pure functions computing a task's temporal and visual
//! state. Nothing in here touches the terminal — callers get plain strings
//! and semantic tokens and decide how to render them.
//!
//! Deadline expressions come in two shapes: an absolute datetime
//! (RFC 3339, `YYYY-MM-DD HH:MM[:SS]`, or a bare date) or a cron expression.
//! Five-field crontab lines get a zero seconds column prepended before
//! parsing. A malformed expression is treated as "no deadline" — parse
//! failures never reach the caller.

use crate::model::{TodoItem, TodoStatus};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use cron::Schedule;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

pub const ELLIPSIS: char = '…';

const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Semantic color of a task. Total over status: every task maps to exactly
/// one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Neutral,
    Warning,
    Done,
}

/// Open/closed marker for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolToken {
    Open,
    Closed,
}

enum Deadline {
    At(DateTime<Local>),
    Schedule(Box<Schedule>),
}

impl Deadline {
    fn next_occurrence(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        match self {
            Deadline::At(t) => Some(*t),
            Deadline::Schedule(s) => s.after(&now).next(),
        }
    }

    /// An absolute deadline is past once `now` reaches it. A schedule is
    /// past only when it has no occurrence left (year-bounded expressions
    /// exhaust; recurring ones never do).
    fn is_past(&self, now: DateTime<Local>) -> bool {
        match self {
            Deadline::At(t) => *t <= now,
            Deadline::Schedule(s) => s.after(&now).next().is_none(),
        }
    }
}

fn parse_deadline(expr: &str) -> Option<Deadline> {
    let expr = expr.trim();
    if expr.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Some(Deadline::At(dt.with_timezone(&Local)));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(expr, "%Y-%m-%d %H:%M:%S") {
        return local_instant(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(expr, "%Y-%m-%d %H:%M") {
        return local_instant(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).and_then(local_instant);
    }

    // Crontab lines carry five fields; the parser wants a seconds column
    let normalized = if expr.split_whitespace().count() == 5 {
        format!("0 {expr}")
    } else {
        expr.to_string()
    };
    Schedule::from_str(&normalized)
        .ok()
        .map(|s| Deadline::Schedule(Box::new(s)))
}

fn local_instant(naive: NaiveDateTime) -> Option<Deadline> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(Deadline::At)
}

/// Human-readable next occurrence of a schedule expression, or `""` when the
/// expression is absent, unparseable, or has no occurrence left.
pub fn format_deadline(cron_time: Option<&str>) -> String {
    format_deadline_at(cron_time, Local::now())
}

pub fn format_deadline_at(cron_time: Option<&str>, now: DateTime<Local>) -> String {
    cron_time
        .and_then(parse_deadline)
        .and_then(|d| d.next_occurrence(now))
        .map(|t| t.format(DEADLINE_FORMAT).to_string())
        .unwrap_or_default()
}

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| {
    // A backtick-delimited fragment, or a line opening with `$ ` or `run:`
    Regex::new(r"(?m)`[^`\n]+`|^\s*(\$|run:)\s+\S+").expect("script pattern")
});

/// True iff the text contains a recognizable shell-command fragment.
pub fn has_embedded_script(description: &str) -> bool {
    SCRIPT_RE.is_match(description)
}

/// True iff the task's parsed deadline has passed. False with no deadline.
pub fn is_timed_out(task: &TodoItem) -> bool {
    is_timed_out_at(task, Local::now())
}

pub fn is_timed_out_at(task: &TodoItem, now: DateTime<Local>) -> bool {
    task.cron_time
        .as_deref()
        .and_then(parse_deadline)
        .map(|d| d.is_past(now))
        .unwrap_or(false)
}

/// An overdue task whose description carries a runnable command — the user
/// should go run it.
pub fn script_resolved(task: &TodoItem) -> bool {
    script_resolved_at(task, Local::now())
}

pub fn script_resolved_at(task: &TodoItem, now: DateTime<Local>) -> bool {
    has_embedded_script(&task.description) && is_timed_out_at(task, now)
}

pub fn color_of(task: &TodoItem) -> ColorToken {
    color_of_at(task, Local::now())
}

pub fn color_of_at(task: &TodoItem, now: DateTime<Local>) -> ColorToken {
    match task.status {
        TodoStatus::Solved => ColorToken::Done,
        TodoStatus::Unsolved if is_timed_out_at(task, now) => ColorToken::Warning,
        TodoStatus::Unsolved => ColorToken::Neutral,
    }
}

pub fn symbol_of(task: &TodoItem) -> SymbolToken {
    match task.status {
        TodoStatus::Unsolved => SymbolToken::Open,
        TodoStatus::Solved => SymbolToken::Closed,
    }
}

/// First `max` characters followed by an ellipsis when `text` is longer than
/// `max`; unchanged otherwise. With `max == 0`, empty input stays empty and
/// anything else collapses to the ellipsis alone.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push(ELLIPSIS);
    out
}
