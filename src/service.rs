use crate::error::{TaskError, TaskResult};
use crate::task::{Repository, Task};

/// Use-case layer for the task list. Holds no state of its own; the
/// repository is the only source of truth.
pub struct TaskService<R> {
    repo: R,
}

impl<R: Repository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Appends a new task and returns it.
    ///
    /// The id is one past the id of the *last* stored task (or 1 for an
    /// empty list). Storage errors are returned as they are.
    pub async fn add(&self, title: &str) -> TaskResult<Task> {
        if title.is_empty() {
            return Err(TaskError::Validation("title cannot be empty".to_string()));
        }

        let mut tasks = self.repo.get_all().await?;

        let id = match tasks.last() {
            Some(last) => last
                .id
                .checked_add(1)
                .ok_or(TaskError::IdsExhausted(last.id))?,
            None => 1,
        };
        let task = Task::new(id, title);
        tasks.push(task.clone());

        self.repo.save(tasks).await?;

        log::info!("added task {} ({:?})", task.id, task.title);
        Ok(task)
    }
}
