use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = ".todo.json";
const DEFAULT_DATA_FILE: &str = "todos.json";
const DEFAULT_BACKUP_DIR: &str = "backup";

/// Configuration for the to-do list, optionally stored in `.todo.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Location of the JSON document holding the list
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory that `backup` moves the document into
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,

    #[serde(default = "default_done_label")]
    pub done_label: String,

    #[serde(default = "default_pending_label")]
    pub pending_label: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BACKUP_DIR)
}

fn default_done_label() -> String {
    "done".to_string()
}

fn default_pending_label() -> String {
    "pending".to_string()
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backup_dir: default_backup_dir(),
            done_label: default_done_label(),
            pending_label: default_pending_label(),
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Relative paths in the file are resolved against `config_dir`.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default().relative_to(config_dir));
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config.relative_to(config_dir))
    }

    pub fn with_data_file(mut self, path: PathBuf) -> Self {
        self.data_file = path;
        self
    }

    pub fn with_backup_dir(mut self, path: PathBuf) -> Self {
        self.backup_dir = path;
        self
    }

    pub fn status_label(&self, done: bool) -> &str {
        if done {
            &self.done_label
        } else {
            &self.pending_label
        }
    }

    fn relative_to(mut self, base: &Path) -> Self {
        if self.data_file.is_relative() {
            self.data_file = base.join(&self.data_file);
        }
        if self.backup_dir.is_relative() {
            self.backup_dir = base.join(&self.backup_dir);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, config: &TodoConfig) {
        let content = serde_json::to_string_pretty(config).unwrap();
        fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = TodoConfig::default();
        assert_eq!(config.data_file, PathBuf::from("todos.json"));
        assert_eq!(config.backup_dir, PathBuf::from("backup"));
        assert_eq!(config.status_label(true), "done");
        assert_eq!(config.status_label(false), "pending");
    }

    #[test]
    fn test_load_missing_config_resolves_defaults() {
        let temp = TempDir::new().unwrap();
        let config = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(config.data_file, temp.path().join("todos.json"));
        assert_eq!(config.backup_dir, temp.path().join("backup"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let config = TodoConfig {
            data_file: PathBuf::from("lists/mine.json"),
            done_label: "feito".to_string(),
            pending_label: "pendente".to_string(),
            ..TodoConfig::default()
        };
        write_config(temp.path(), &config);

        let loaded = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, temp.path().join("lists/mine.json"));
        assert_eq!(loaded.status_label(true), "feito");
        assert_eq!(loaded.status_label(false), "pendente");
    }

    #[test]
    fn test_partial_file_falls_back_per_field() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"done_label": "ok"}"#).unwrap();

        let loaded = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.done_label, "ok");
        assert_eq!(loaded.pending_label, "pending");
        assert_eq!(loaded.data_file, temp.path().join("todos.json"));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let config = TodoConfig::default().with_data_file(elsewhere.path().join("t.json"));
        write_config(temp.path(), &config);

        let loaded = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, elsewhere.path().join("t.json"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            TodoConfig::load(temp.path()),
            Err(TodoError::Serialization(_))
        ));
    }
}
