//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FileKeyValueStore`] - JSON-file-per-key storage under the kiosk data directory
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryStore`] - In-memory storage that can simulate disabled storage

pub mod file_store;
pub mod mock;

pub use file_store::FileKeyValueStore;
pub use mock::InMemoryStore;
