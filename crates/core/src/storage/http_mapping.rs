//! Pure functions for mapping storage and domain errors to HTTP status codes.

use super::RepositoryError;
use crate::todo::TodoError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use todolist_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Todo",
///     id: "1".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`TodoError`] to an HTTP status code.
///
/// A missing to-do is a client error (404); storage failures defer to
/// [`repository_error_to_status_code`].
pub fn todo_error_to_status_code(error: &TodoError) -> u16 {
    match error {
        TodoError::NotFound { .. } => 404,
        TodoError::Repository(repo_error) => repository_error_to_status_code(repo_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            entity_type: "Todo",
            id: "3".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("pool timed out".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("database is locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = RepositoryError::InvalidData("bad row".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_todo_not_found_maps_to_404() {
        assert_eq!(
            todo_error_to_status_code(&TodoError::NotFound { id: 99999 }),
            404
        );
    }

    #[test]
    fn test_todo_repository_error_uses_repository_mapping() {
        let error = TodoError::Repository(RepositoryError::ConnectionFailed("down".to_string()));
        assert_eq!(todo_error_to_status_code(&error), 503);
    }
}
