//! Storage adapters for the task bounded context.
//!
//! Concrete implementations of the [`TaskRepository`] port. Only the
//! in-memory adapter exists; a durable backend would slot in behind the
//! same trait.
//!
//! [`TaskRepository`]: crate::task::ports::TaskRepository

pub mod memory;
