//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`InMemoryStore`] - In-memory key-value storage with failure injection

pub mod memory_store;

pub use memory_store::InMemoryStore;
