//! HTTP surface: the server-rendered board page and the JSON task API.
//!
//! Two handler sets share one store through [`state::AppState`]:
//!
//! - Page routes: `GET /`, `POST /add`, `GET /toggle/{id}`,
//!   `GET /delete/{id}` — HTML and 303 redirects.
//! - API routes: `GET|POST /api/todos`, `GET /api/todos/{id}` — JSON.
//!
//! Unknown identifiers answer 404 and duplicate identifiers on the API
//! create path answer 400, both with JSON error bodies.

pub mod error;
pub mod handlers;
pub mod state;
mod templates;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use self::state::AppState;

/// Builds the application router over the given state.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/add", post(handlers::pages::add))
        .route("/toggle/{id}", get(handlers::pages::toggle))
        .route("/delete/{id}", get(handlers::pages::delete))
        .route(
            "/api/todos",
            get(handlers::api::list_todos).post(handlers::api::create_todo),
        )
        .route("/api/todos/{id}", get(handlers::api::get_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the HTTP server on the given address.
///
/// # Errors
///
/// Returns the underlying I/O error when the listener cannot be bound or
/// the server fails while running.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("task board listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .map_err(std::io::Error::other)
}
