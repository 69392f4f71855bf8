use super::{BackupReport, TodoStore};
use crate::error::{Result, TodoError};
use crate::model::TodoList;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct FileStore {
    data_file: PathBuf,
    backup_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            backup_dir: backup_dir.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    fn backup_path(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "todos.json".into());
        self.backup_dir.join(name)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "todos.json".into());
        name.push(".tmp");
        self.data_file.with_file_name(name)
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }
        Ok(())
    }
}

/// Serializes the list as a JSON array indented with tabs.
pub fn to_document(todos: &TodoList) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    todos.serialize(&mut ser).map_err(TodoError::Serialization)?;
    Ok(buf)
}

/// Moves `from` to `to`, copying and removing when a rename is not possible
/// (e.g. across filesystems).
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(e),
        Err(e) => {
            debug!(error = %e, "rename failed, falling back to copy");
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<TodoList> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.data_file.display(), "no data file, starting empty");
                return Ok(TodoList::new());
            }
            Err(e) => return Err(TodoError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(TodoList::new());
        }

        let mut todos: TodoList =
            serde_json::from_str(&content).map_err(|source| TodoError::Corrupt {
                path: self.data_file.clone(),
                source,
            })?;
        todos.normalize()?;
        debug!(count = todos.len(), "loaded to-dos");
        Ok(todos)
    }

    fn save(&mut self, todos: &TodoList) -> Result<()> {
        self.ensure_parent(&self.data_file)?;

        // Write the whole document next to the target, then swap it in.
        let tmp = self.temp_path();
        fs::write(&tmp, to_document(todos)?).map_err(TodoError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.data_file) {
            let _ = fs::remove_file(&tmp);
            return Err(TodoError::Io(e));
        }

        debug!(count = todos.len(), path = %self.data_file.display(), "saved to-dos");
        Ok(())
    }

    fn backup(&mut self) -> Result<BackupReport> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            TodoError::Backup(format!(
                "cannot create {}: {}",
                self.backup_dir.display(),
                e
            ))
        })?;

        let todo_count = self.load().map(|t| t.len()).unwrap_or_else(|e| {
            warn!(error = %e, "backing up a document that does not parse");
            0
        });

        let destination = self.backup_path();
        move_file(&self.data_file, &destination).map_err(|e| {
            TodoError::Backup(format!(
                "cannot move {} to {}: {}",
                self.data_file.display(),
                destination.display(),
                e
            ))
        })?;

        info!(destination = %destination.display(), todo_count, "backup written");
        Ok(BackupReport {
            destination,
            todo_count,
        })
    }

    fn location(&self) -> String {
        self.data_file.display().to_string()
    }
}
