use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todolist_core::storage::{
    repository_error_to_status_code, todo_error_to_status_code, RepositoryError,
};
use todolist_core::todo::TodoError;

/// Handler error type that wraps `anyhow::Error`.
///
/// Domain and storage errors are downcast and mapped to their status code;
/// anything else becomes a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(todo_error) = self.0.downcast_ref::<TodoError>() {
            todo_error_to_status_code(todo_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
