//! SQLite storage backend implementation.
//!
//! Implements the repository trait on top of a `sqlx::SqlitePool`, so each
//! request borrows its own connection from the pool.

mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
