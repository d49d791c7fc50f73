use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors returned by the to-do business operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// An id-addressed operation referenced a to-do that does not exist.
    #[error("Todo not found with id: {id}")]
    NotFound { id: i64 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_carries_id() {
        let error = TodoError::NotFound { id: 99999 };
        assert_eq!(error.to_string(), "Todo not found with id: 99999");
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let error = TodoError::from(RepositoryError::QueryFailed("disk I/O error".to_string()));
        assert_eq!(error.to_string(), "Query failed: disk I/O error");
    }
}
