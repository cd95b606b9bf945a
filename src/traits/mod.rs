//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - Durable string key-value storage under the complaint store

pub mod storage;

pub use storage::KeyValueStore;
