//! JSON task API handlers.
//!
//! The API mirrors the page routes over the same store but returns tasks
//! in insertion order and, on the create path, trusts the caller-supplied
//! record verbatim (identifier included).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::task::domain::{Task, TaskId};
use crate::web::{error::WebError, state::AppState};

/// `GET /api/todos` — all tasks in insertion order.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Task>>, WebError> {
    Ok(Json(state.board().list().await?))
}

/// `GET /api/todos/{id}` — a single task.
///
/// Answers 404 when the identifier is unknown.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, WebError> {
    let task_id = TaskId::from(id);
    let task = state
        .board()
        .find(&task_id)
        .await?
        .ok_or_else(|| WebError::NotFound(task_id))?;
    Ok(Json(task))
}

/// `POST /api/todos` — adopts a caller-formed task and echoes it back.
///
/// Answers 400 when a task with the supplied identifier already exists;
/// the store is left unchanged.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(task): Json<Task>,
) -> Result<Json<Task>, WebError> {
    Ok(Json(state.board().import(task).await?))
}
