//! Task board management: the task bounded context.
//!
//! This module implements the board's behavioural contract: creating tasks
//! with server-generated identity and creation timestamps, adopting
//! caller-formed tasks verbatim, listing in insertion and display order,
//! toggling completion, and deletion. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
