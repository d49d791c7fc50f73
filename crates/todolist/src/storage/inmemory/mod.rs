//! In-memory storage backend.
//!
//! Stores to-dos in a `BTreeMap` behind an `Arc<RwLock<_>>`. Useful for tests
//! and for running the service without a database file.

mod repository;

pub use repository::InMemoryRepository;
