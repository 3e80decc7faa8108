//! Task tracking for aalto.
//!
//! This module implements the whole of the tracker: creating task records,
//! toggling and deleting them, filtering and searching the collection, and
//! round-tripping the collection through a persisted archive. The module
//! follows hexagonal architecture:
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
