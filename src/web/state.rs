//! Shared application state for the web layer.

use mockable::DefaultClock;
use std::sync::Arc;

use crate::task::{adapters::memory::InMemoryTaskRepository, services::TaskBoardService};

/// Board service type backing the web layer.
pub type BoardService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

/// State shared by all request handlers.
///
/// The board service is injected here rather than living in a process-wide
/// global, so tests build a router over a fresh, isolated store.
#[derive(Clone)]
pub struct AppState {
    board: BoardService,
}

impl AppState {
    /// Creates state over a fresh, empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: TaskBoardService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ),
        }
    }

    /// Returns the board service.
    #[must_use]
    pub const fn board(&self) -> &BoardService {
        &self.board
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
