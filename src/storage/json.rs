use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::StorageError;
use crate::task::{Repository, Task};

pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// File-backed repository. The whole list lives in one JSON array.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// One space per indent level, so the file stays easy to eyeball
fn to_pretty_json(tasks: &[Task]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser)?;
    Ok(buf)
}

#[async_trait]
impl Repository for JsonStorage {
    async fn get_all(&self) -> Result<Vec<Task>, StorageError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            // No file yet just means nothing has been added
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::ReadFile {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // `null` is what older versions wrote for an empty list
        let tasks: Option<Vec<Task>> =
            serde_json::from_slice(&data).map_err(|source| StorageError::ParseFile {
                path: self.path.clone(),
                source,
            })?;
        let tasks = tasks.unwrap_or_default();

        log::debug!("loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    async fn save(&self, tasks: Vec<Task>) -> Result<(), StorageError> {
        let data = to_pretty_json(&tasks).map_err(StorageError::Serialize)?;

        tokio::fs::write(&self.path, data)
            .await
            .map_err(|source| StorageError::WriteFile {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("wrote {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
