//! Business operations on to-do items.
//!
//! Sits between the HTTP handlers and the repository: converts between the
//! public representation and the stored entity, and turns a missing row into
//! [`TodoError::NotFound`] for every id-addressed operation.

use std::sync::Arc;

use todolist_core::storage::TodoRepository;
use todolist_core::todo::{
    replace_fields, to_new_todo, to_representation, validate_representation, Todo, TodoError,
    TodoRepresentation,
};

type Result<T> = std::result::Result<T, TodoError>;

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Lists every to-do. Order is whatever the backend returns.
    pub async fn get_all_todos(&self) -> Result<Vec<TodoRepresentation>> {
        let todos = self.repo.find_all_todos().await?;
        Ok(todos.iter().map(to_representation).collect())
    }

    pub async fn get_todo_by_id(&self, id: i64) -> Result<TodoRepresentation> {
        let todo = self.find_or_fail(id).await?;
        Ok(to_representation(&todo))
    }

    /// Stores a new to-do and echoes back what was stored.
    pub async fn create_todo(&self, repr: TodoRepresentation) -> Result<TodoRepresentation> {
        validate_representation(&repr)?;

        let new_todo = to_new_todo(repr);
        let id = self.repo.insert_todo(&new_todo).await?;
        let todo = new_todo.into_todo(id);

        tracing::info!(todo_id = todo.id, title = ?todo.title, "Created todo");
        Ok(to_representation(&todo))
    }

    /// Replaces all mutable fields of an existing to-do.
    pub async fn update_todo(
        &self,
        id: i64,
        repr: TodoRepresentation,
    ) -> Result<TodoRepresentation> {
        validate_representation(&repr)?;

        let existing = self.find_or_fail(id).await?;
        let updated = replace_fields(existing, repr);
        self.repo.update_todo(&updated).await?;

        tracing::info!(todo_id = id, completed = updated.completed, "Updated todo");
        Ok(to_representation(&updated))
    }

    pub async fn delete_todo_by_id(&self, id: i64) -> Result<()> {
        let todo = self.find_or_fail(id).await?;
        self.repo.delete_todo(&todo).await?;

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }

    async fn find_or_fail(&self, id: i64) -> Result<Todo> {
        self.repo
            .find_todo(id)
            .await?
            .ok_or(TodoError::NotFound { id })
    }
}
