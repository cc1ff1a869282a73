//! Server-rendered board page and form handlers.
//!
//! Mutating page routes answer 303 so the browser lands back on `GET /`
//! after every action.

use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::task::{
    domain::{Priority, TaskId},
    services::NewTaskRequest,
};
use crate::web::{error::WebError, state::AppState, templates};

/// Form fields for creating a task from the board page.
#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Priority level; absent means low.
    pub priority: Option<i64>,
}

/// `GET /` — renders the board with tasks in display order.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let tasks = state.board().list_for_display().await?;
    let page = templates::render_index(&tasks)?;
    Ok(Html(page))
}

/// `POST /add` — creates a task from form fields and redirects to the
/// board.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddTaskForm>,
) -> Result<Redirect, WebError> {
    let mut request = NewTaskRequest::new(form.title);
    if let Some(description) = form.description {
        request = request.with_description(description);
    }
    if let Some(priority) = form.priority {
        request = request.with_priority(Priority::new(priority));
    }
    state.board().create(request).await?;
    Ok(Redirect::to("/"))
}

/// `GET /toggle/{id}` — flips completion and redirects to the board.
///
/// Answers 404 when the identifier is unknown.
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, WebError> {
    state.board().toggle(&TaskId::from(id)).await?;
    Ok(Redirect::to("/"))
}

/// `GET /delete/{id}` — removes the task and redirects to the board.
///
/// Answers 404 when the identifier is unknown.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, WebError> {
    state.board().delete(&TaskId::from(id)).await?;
    Ok(Redirect::to("/"))
}
