use std::path::PathBuf;

use thiserror::Error;

/// Failures coming out of a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to query tasks: {0}")]
    Query(#[source] sqlx::Error),

    #[error("failed to write tasks: {0}")]
    Write(#[source] sqlx::Error),

    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),
}

impl StorageError {
    /// True for failures while loading the collection.
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Self::ReadFile { .. } | Self::ParseFile { .. } | Self::Query(_)
        )
    }

    /// True for failures while persisting the collection.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::Serialize(_) | Self::WriteFile { .. } | Self::Write(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("no task id left after {0}")]
    IdsExhausted(i64),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a database URL is required for the postgres backend (set --database-url or DATABASE_URL)")]
    MissingDatabaseUrl,
}
