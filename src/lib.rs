//! Eisenhower: a prioritised in-memory to-do board served over HTTP.
//!
//! The board holds an ordered collection of task records with create,
//! list, toggle-complete, and delete operations, exposed through a
//! server-rendered HTML page and a parallel JSON API. State is volatile
//! and scoped to the process lifetime.
//!
//! # Architecture
//!
//! The task bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete port implementations (in-memory only)
//!
//! The [`web`] module is the delivery mechanism: an axum router whose
//! handlers borrow the board service from shared application state.
//!
//! # Modules
//!
//! - [`task`]: Board domain, store contract, and orchestration
//! - [`web`]: HTTP routes, handlers, and error mapping

pub mod task;
pub mod web;
