//! Aalto: a single-user terminal task tracker.
//!
//! This crate provides the data model and persistence for short-lived task
//! records: an insertion-ordered in-memory store, a line-oriented flat-file
//! archive, and a service that keeps the two in step after every mutation.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (flat file, in-memory)
//!
//! # Modules
//!
//! - [`task`]: task records, the owning store, and archive round trips

pub mod task;
