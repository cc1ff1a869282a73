//! In-memory task repository preserving insertion order.

use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks live in a `Vec` guarded by a single lock, so every operation is
/// serialised against the collection and listing returns insertion order.
/// All state is lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps a poisoned-lock error into the storage error variant.
fn lock_poisoned(err: impl fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        if tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        let slot = tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(lock_poisoned)?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(lock_poisoned)?;
        Ok(tasks.clone())
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(lock_poisoned)?;
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        tasks.remove(index);
        Ok(())
    }
}
