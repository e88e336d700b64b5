use async_trait::async_trait;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions};

use crate::error::StorageError;
use crate::task::{Repository, Task};

/// Opens the pool the postgres backend runs on.
///
/// One connection is made up front so an unreachable or misconfigured
/// server fails here with the driver's own error; the pool itself fills
/// lazily. The caller owns the pool and is expected to `close()` it before
/// exit.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    let options: PgConnectOptions = database_url.parse().map_err(StorageError::Connection)?;

    PgConnection::connect_with(&options)
        .await
        .map_err(StorageError::Connection)?
        .close()
        .await
        .map_err(StorageError::Connection)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options);

    log::info!("connected to postgres");
    Ok(pool)
}

/// Database-backed repository over a single `tasks` table.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    db: PgPool,
}

impl PostgresStorage {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for PostgresStorage {
    async fn get_all(&self) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>("SELECT id, title, done FROM tasks ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(StorageError::Query)?;

        log::debug!("loaded {} tasks from postgres", tasks.len());
        Ok(tasks)
    }

    // Clear-then-reinsert inside one transaction. Returning early drops `tx`,
    // which rolls everything back.
    async fn save(&self, tasks: Vec<Task>) -> Result<(), StorageError> {
        let mut tx = self.db.begin().await.map_err(StorageError::Write)?;

        sqlx::query("TRUNCATE TABLE tasks")
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Write)?;

        for task in &tasks {
            sqlx::query("INSERT INTO tasks (id, title, done) VALUES ($1, $2, $3)")
                .bind(task.id)
                .bind(&task.title)
                .bind(task.done)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::Write)?;
        }

        tx.commit().await.map_err(StorageError::Write)?;

        log::debug!("replaced postgres tasks with {} rows", tasks.len());
        Ok(())
    }
}
