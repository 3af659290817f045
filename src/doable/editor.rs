use crate::error::{Result, TodoError};
use std::env;
use std::fs;
use std::process::Command;
use uuid::Uuid;

/// Content exchanged with the external editor.
/// Buffer format: title on the first line, a blank line, then the
/// description body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub description: String,
}

impl EditorContent {
    pub fn new(title: String, description: String) -> Self {
        Self { title, description }
    }

    pub fn to_buffer(&self) -> String {
        if self.description.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.description)
        }
    }

    /// First line is the title, one blank separator line is skipped, the
    /// rest is the description verbatim (newlines preserved).
    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();

        let rest: Vec<&str> = lines.collect();
        let body = rest
            .split_first()
            .filter(|(first, _)| first.trim().is_empty())
            .map(|(_, tail)| tail.join("\n"))
            .unwrap_or_else(|| rest.join("\n"));

        Self {
            title,
            description: body.trim_end().to_string(),
        }
    }
}

/// Launch `$VISUAL`/`$EDITOR` (falling back to `vi`) on a temp buffer seeded
/// with `initial`, and parse the result back.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());

    let path = env::temp_dir().join(format!("doable-{}.txt", Uuid::new_v4()));
    fs::write(&path, initial.to_buffer()).map_err(TodoError::Io)?;

    // The editor value may carry arguments ("code -w")
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| TodoError::Api("EDITOR is empty".into()))?;
    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(TodoError::Io)?;

    if !status.success() {
        let _ = fs::remove_file(&path);
        return Err(TodoError::Api("Editor exited with an error".into()));
    }

    let buffer = fs::read_to_string(&path).map_err(TodoError::Io)?;
    let _ = fs::remove_file(&path);
    Ok(EditorContent::from_buffer(&buffer))
}
