use async_trait::async_trait;

use crate::todo::{NewTodo, Todo};

use super::Result;

/// Persistence contract for to-do items, keyed by an integer identifier.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new to-do and returns the identifier assigned to it.
    async fn insert_todo(&self, todo: &NewTodo) -> Result<i64>;

    /// Gets a to-do by its identifier.
    async fn find_todo(&self, id: i64) -> Result<Option<Todo>>;

    /// Gets every stored to-do. Callers must not rely on the order.
    async fn find_all_todos(&self) -> Result<Vec<Todo>>;

    /// Overwrites an existing to-do.
    async fn update_todo(&self, todo: &Todo) -> Result<()>;

    /// Deletes the given to-do.
    async fn delete_todo(&self, todo: &Todo) -> Result<()>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<()>;
}
