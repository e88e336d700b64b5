use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use task_manager::storage::postgres;
use task_manager::*;

// Exit code for bad invocations (missing arguments, unknown command)
const EXIT_USAGE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout is reserved for the result message
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    let command = match args.command() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    if !args.extra.is_empty() {
        log::debug!("ignoring extra arguments {:?}", args.extra);
    }

    let storage = args
        .storage_config()
        .context("invalid storage configuration")?;

    let exit = match storage {
        StorageConfig::Json { path } => {
            log::debug!("using json storage at {}", path.display());
            run(TaskService::new(JsonStorage::new(path)), command).await
        }
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = match postgres::connect(&database_url, max_connections).await {
                Ok(pool) => pool,
                Err(e) => {
                    eprintln!("DB connection error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            let exit = run(TaskService::new(PostgresStorage::new(pool.clone())), command).await;
            pool.close().await;
            exit
        }
    };

    Ok(exit)
}

async fn run<R: Repository>(service: TaskService<R>, command: Command) -> ExitCode {
    match command {
        Command::Add { title } => match service.add(&title).await {
            Ok(task) => {
                println!("Task added successfully with ID: {}", task.id);
                ExitCode::SUCCESS
            }
            Err(e) => {
                if let TaskError::Storage(storage) = &e {
                    log::debug!("{} failed: {storage:?}", storage_stage(storage));
                }
                eprintln!("Error adding task: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn storage_stage(err: &StorageError) -> &'static str {
    if err.is_read() {
        "loading tasks"
    } else if err.is_write() {
        "saving tasks"
    } else {
        "storage access"
    }
}
