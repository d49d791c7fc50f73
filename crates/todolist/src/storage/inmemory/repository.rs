//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todolist_core::storage::{RepositoryError, Result, TodoRepository};
use todolist_core::todo::{NewTodo, Todo};

#[derive(Debug, Default)]
struct Store {
    todos: BTreeMap<i64, Todo>,
    /// Last identifier handed out. Never reused, even after deletes.
    last_id: i64,
}

/// In-memory storage backend.
///
/// Identifiers start at 1 and increase monotonically, mirroring an
/// auto-increment column. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Todo",
        id: id.to_string(),
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn insert_todo(&self, todo: &NewTodo) -> Result<i64> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = store.last_id;
        store.todos.insert(id, todo.clone().into_todo(id));
        Ok(id)
    }

    async fn find_todo(&self, id: i64) -> Result<Option<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.get(&id).cloned())
    }

    async fn find_all_todos(&self) -> Result<Vec<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.values().cloned().collect())
    }

    async fn update_todo(&self, todo: &Todo) -> Result<()> {
        let mut store = self.store.write().await;
        match store.todos.get_mut(&todo.id) {
            Some(existing) => {
                *existing = todo.clone();
                Ok(())
            }
            None => Err(not_found(todo.id)),
        }
    }

    async fn delete_todo(&self, todo: &Todo) -> Result<()> {
        let mut store = self.store.write().await;
        if store.todos.remove(&todo.id).is_none() {
            return Err(not_found(todo.id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();

        let first = repo.insert_todo(&NewTodo::new("one")).await.unwrap();
        let second = repo.insert_todo(&NewTodo::new("two")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_find_returns_inserted_todo() {
        let repo = InMemoryRepository::new();
        let new_todo = NewTodo::new("Buy milk").with_description("2%");

        let id = repo.insert_todo(&new_todo).await.unwrap();
        let found = repo.find_todo(id).await.unwrap();

        assert_eq!(found, Some(new_todo.into_todo(id)));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryRepository::new();

        assert_eq!(repo.find_todo(99999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_returns_every_todo() {
        let repo = InMemoryRepository::new();
        for title in ["a", "b", "c"] {
            repo.insert_todo(&NewTodo::new(title)).await.unwrap();
        }

        let todos = repo.find_all_todos().await.unwrap();

        assert_eq!(todos.len(), 3);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = InMemoryRepository::new();
        let id = repo.insert_todo(&NewTodo::new("draft")).await.unwrap();

        let updated = NewTodo::new("final").with_completed(true).into_todo(id);
        repo.update_todo(&updated).await.unwrap();

        assert_eq!(repo.find_todo(id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let repo = InMemoryRepository::new();
        let ghost = NewTodo::new("ghost").into_todo(42);

        let result = repo.update_todo(&ghost).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_and_ids_are_not_reused() {
        let repo = InMemoryRepository::new();
        let id = repo.insert_todo(&NewTodo::new("temp")).await.unwrap();
        let todo = repo.find_todo(id).await.unwrap().unwrap();

        repo.delete_todo(&todo).await.unwrap();
        let next = repo.insert_todo(&NewTodo::new("next")).await.unwrap();

        assert_eq!(repo.find_todo(id).await.unwrap(), None);
        assert_eq!(next, id + 1);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_not_found() {
        let repo = InMemoryRepository::new();
        let id = repo.insert_todo(&NewTodo::new("once")).await.unwrap();
        let todo = repo.find_todo(id).await.unwrap().unwrap();

        repo.delete_todo(&todo).await.unwrap();
        let result = repo.delete_todo(&todo).await;

        assert_eq!(result, Err(not_found(id)));
    }
}
