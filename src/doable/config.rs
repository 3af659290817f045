use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE: &str = "todo.db";
const DEFAULT_TITLE_WIDTH: usize = 50;
const DEFAULT_DESCRIPTION_WIDTH: usize = 80;

/// Configuration for doable, stored next to the collection file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Collection file name inside the data directory
    #[serde(default = "default_database")]
    pub database: String,

    /// Max title characters shown in the list view before truncation
    #[serde(default = "default_title_width")]
    pub title_width: usize,

    /// Max description characters shown in the list view before truncation
    #[serde(default = "default_description_width")]
    pub description_width: usize,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_title_width() -> usize {
    DEFAULT_TITLE_WIDTH
}

fn default_description_width() -> usize {
    DEFAULT_DESCRIPTION_WIDTH
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            title_width: DEFAULT_TITLE_WIDTH,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.database, "todo.db");
        assert_eq!(config.title_width, 50);
        assert_eq!(config.description_width, 80);
    }

    #[test]
    fn load_missing_dir_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TodoConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = TodoConfig::default();
        config.title_width = 30;
        config.save(dir.path()).unwrap();

        let loaded = TodoConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "database": "other.db" }"#,
        )
        .unwrap();

        let loaded = TodoConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.database, "other.db");
        assert_eq!(loaded.title_width, 50);
    }
}
