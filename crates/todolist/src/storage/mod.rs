//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `todolist_core::storage`. The backend is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite backend on a pooled `sqlx` connection set
//! - `inmemory`: process-local backend, data is lost on shutdown
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p todolist
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p todolist --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p todolist --features sqlite"
);

// The in-memory backend doubles as the test fixture for handler and service tests.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
