//! SQLite error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `todolist_core::storage`.

use todolist_core::storage::RepositoryError;

/// SQLite primary result code for "unable to open the database file".
const SQLITE_CANTOPEN: &str = "14";

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - Pool and I/O errors, `SQLITE_CANTOPEN` → `RepositoryError::ConnectionFailed`
/// - Column decode errors → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: &sqlx::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type,
            id: "unknown".to_string(),
        },

        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(err.to_string())
        }

        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(SQLITE_CANTOPEN) => {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::InvalidData(format!("Malformed {entity_type} row: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a sqlx error with a known ID to a RepositoryError.
pub fn map_sqlx_error_with_id(
    err: &sqlx::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type,
            id: id.into(),
        },
        _ => map_sqlx_error(err, entity_type),
    }
}
