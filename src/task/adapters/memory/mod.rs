//! In-memory adapter implementations.
//!
//! The in-memory store is the only backend: board state is volatile and
//! scoped to the process lifetime, initialised empty at startup.

mod task;

pub use task::InMemoryTaskRepository;
