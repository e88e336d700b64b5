//! Minimal task tracker: append a titled task to a list that lives either in
//! a JSON file or in a Postgres table.
//!
//! ```text
//! main ──> TaskService<R> ──> R: Repository ──> JsonStorage | PostgresStorage
//! ```

pub mod cli;
pub mod error;
pub mod service;
pub mod storage;
pub mod task;

pub use cli::{Backend, Cli, Command, CommandError, StorageConfig};
pub use error::{ConfigError, StorageError, TaskError};
pub use service::TaskService;
pub use storage::{JsonStorage, PostgresStorage};
pub use task::{Repository, Task};
