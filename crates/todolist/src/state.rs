//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is chosen by feature flag and
//! injected into the business service as a trait object.

use std::sync::Arc;

use todolist_core::storage::TodoRepository;

use crate::config::Config;
use crate::service::TodoService;

/// Shared application state.
///
/// Cloned for each request handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend, kept for health probes.
    pub todo_repo: Arc<dyn TodoRepository>,
    /// Business operations over the same backend.
    pub todos: TodoService,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            todos: TodoService::new(Arc::clone(&todo_repo)),
            todo_repo,
        }
    }

    /// Builds the state for the SQLite backend, opening the connection pool.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::SqliteRepository;

        let repo =
            SqliteRepository::connect(&config.database_url, config.database_max_connections)
                .await?;

        tracing::info!(
            database_url = %config.database_url,
            max_connections = config.database_max_connections,
            "Using SQLite storage"
        );

        Ok(Self::new(Arc::new(repo)))
    }

    /// Builds the state for the in-memory backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> anyhow::Result<Self> {
        use crate::storage::InMemoryRepository;

        tracing::warn!("Using in-memory storage, data will be lost on shutdown");

        Ok(Self::new(Arc::new(InMemoryRepository::new())))
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}
