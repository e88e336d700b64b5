use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

// Task struct holding the in memory representation of a task.
// The JSON keys are `ID`, `Title` and `Done` so files written by the
// previous version of the tool still load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// A fresh, not yet completed task.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Storage boundary for the task list.
///
/// There is no incremental API: callers read the whole collection and
/// write the whole collection back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    /// Returns every stored task in storage order. A missing backing store
    /// yields an empty list.
    async fn get_all(&self) -> Result<Vec<Task>, StorageError>;

    /// Replaces the stored collection with `tasks` as a whole.
    async fn save(&self, tasks: Vec<Task>) -> Result<(), StorageError>;
}
