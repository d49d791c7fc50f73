//! SQLite repository implementation.
//!
//! Implements `TodoRepository` from `todolist_core::storage` using SQLite.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use todolist_core::storage::{RepositoryError, Result, TodoRepository};
use todolist_core::todo::{NewTodo, Todo};

use super::error::{map_sqlx_error, map_sqlx_error_with_id};
use super::schema;

/// Column layout shared by every `SELECT` in [`schema`].
type TodoRow = (i64, Option<String>, Option<String>, bool);

fn row_to_todo((id, title, description, completed): TodoRow) -> Todo {
    Todo {
        id,
        title,
        description,
        completed,
    }
}

/// SQLite-based repository implementation.
///
/// Holds a connection pool; clones share the same pool.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens a pool against `url`, creating the database file if needed.
    ///
    /// Schema tables are created automatically.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Creates a repository backed by a private in-memory database.
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to a single connection that never expires.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and initializes the schema.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn insert_todo(&self, todo: &NewTodo) -> Result<i64> {
        let result = sqlx::query(schema::INSERT_TODO)
            .bind(todo.title.as_deref())
            .bind(todo.description.as_deref())
            .bind(todo.completed)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&e, "Todo"))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_todo(&self, id: i64) -> Result<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(schema::SELECT_TODO_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error_with_id(&e, "Todo", id.to_string()))?;

        Ok(row.map(row_to_todo))
    }

    async fn find_all_todos(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(schema::SELECT_ALL_TODOS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&e, "Todo"))?;

        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn update_todo(&self, todo: &Todo) -> Result<()> {
        let result = sqlx::query(schema::UPDATE_TODO)
            .bind(todo.id)
            .bind(todo.title.as_deref())
            .bind(todo.description.as_deref())
            .bind(todo.completed)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error_with_id(&e, "Todo", todo.id.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(map_sqlx_error_with_id(
                &sqlx::Error::RowNotFound,
                "Todo",
                todo.id.to_string(),
            ));
        }
        Ok(())
    }

    async fn delete_todo(&self, todo: &Todo) -> Result<()> {
        let result = sqlx::query(schema::DELETE_TODO)
            .bind(todo.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error_with_id(&e, "Todo", todo.id.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(map_sqlx_error_with_id(
                &sqlx::Error::RowNotFound,
                "Todo",
                todo.id.to_string(),
            ));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&e, "Todo"))?;
        Ok(())
    }
}
