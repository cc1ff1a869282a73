//! Service layer for board operations over the task store.

use crate::task::{
    domain::{Priority, Task, TaskId, sort_for_display},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from user-supplied form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    title: String,
    description: Option<String>,
    priority: Priority,
}

impl NewTaskRequest {
    /// Creates a request with the given title and low priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Board orchestration service.
///
/// Owns the store behind the repository port and the clock used to stamp
/// creation timestamps; the web layer holds a clone per request handler.
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task from form input.
    ///
    /// A fresh identifier is generated and the creation timestamp is
    /// stamped from the injected clock, exactly once. Input is stored as
    /// given — empty titles and out-of-range priorities are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store rejects the
    /// insert.
    pub async fn create(&self, request: NewTaskRequest) -> TaskBoardResult<Task> {
        let task = Task::new(
            request.title,
            request.description,
            request.priority,
            &*self.clock,
        );
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Adopts a caller-formed task, keeping its identifier, timestamp, and
    /// every other field verbatim.
    ///
    /// Only identifier uniqueness is enforced; nothing is generated or
    /// re-stamped on this path.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] (wrapped) when the
    /// identifier is already present; the store is left unchanged.
    pub async fn import(&self, task: Task) -> TaskBoardResult<Task> {
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Returns all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store cannot be
    /// read.
    pub async fn list(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns all tasks in display order: incomplete before completed,
    /// then by descending priority, with ties keeping insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store cannot be
    /// read.
    pub async fn list_for_display(&self) -> TaskBoardResult<Vec<Task>> {
        let mut tasks = self.repository.list_all().await?;
        sort_for_display(&mut tasks);
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store cannot be
    /// read.
    pub async fn find(&self, id: &TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Flips the completion flag of the task with the given identifier
    /// and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the
    /// identifier is unknown; the store is left unchanged.
    pub async fn toggle(&self, id: &TaskId) -> TaskBoardResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        task.toggle();
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the
    /// identifier is unknown; the store is left unchanged.
    pub async fn delete(&self, id: &TaskId) -> TaskBoardResult<()> {
        Ok(self.repository.remove(id).await?)
    }
}
