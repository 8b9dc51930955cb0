//! # scoreline-memory
//!
//! Durable storage for the learned translation cache: key-value backends,
//! the corruption-tolerant persistence adapter, and the bounded mapping store.

pub mod backend;
pub mod persistence;
pub mod store;

pub use backend::{open_backend, MemoryBackend, SqliteBackend};
pub use persistence::PersistenceAdapter;
pub use store::{LearnedMappingStore, StoreLimits, UpsertOutcome, UpsertResult};
