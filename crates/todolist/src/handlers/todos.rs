//! Todo CRUD handlers.
//!
//! Mounted under `/api/todos`. Handlers only parse and serialize; the work
//! happens in [`TodoService`](crate::service::TodoService).

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use todolist_core::todo::TodoRepresentation;

use crate::{handlers::AppError, state::AppState};

/// Error response with message (for malformed request bodies).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

fn parse_body(
    payload: Result<Json<TodoRepresentation>, JsonRejection>,
) -> Result<TodoRepresentation, Response> {
    let Json(payload) = payload.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse JSON body: {}", e.body_text()),
        )
        .into_response()
    })?;
    Ok(payload)
}

/// List all todos (GET /api/todos/getAll).
#[utoipa::path(
    get,
    path = "/api/todos/getAll",
    tag = "todos",
    responses(
        (status = 200, description = "Every stored todo", body = [TodoRepresentation])
    )
)]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoRepresentation>>, AppError> {
    let todos = state.todos.get_all_todos().await?;
    Ok(Json(todos))
}

/// Get a single todo by ID (GET /api/todos/{id}).
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "The todo", body = TodoRepresentation),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoRepresentation>, AppError> {
    let todo = state.todos.get_todo_by_id(id).await?;
    Ok(Json(todo))
}

/// Create a new todo (POST /api/todos/create).
#[utoipa::path(
    post,
    path = "/api/todos/create",
    tag = "todos",
    request_body = TodoRepresentation,
    responses(
        (status = 200, description = "The created todo", body = TodoRepresentation),
        (status = 400, description = "Body is not valid JSON")
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoRepresentation>, JsonRejection>,
) -> Result<Json<TodoRepresentation>, Response> {
    let payload = parse_body(payload)?;
    tracing::debug!(payload = ?payload, "Received create todo request");

    let created = state
        .todos
        .create_todo(payload)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(Json(created))
}

/// Replace a todo by ID (PUT /api/todos/{id}).
#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo identifier")),
    request_body = TodoRepresentation,
    responses(
        (status = 200, description = "The updated todo", body = TodoRepresentation),
        (status = 400, description = "Body is not valid JSON"),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoRepresentation>, JsonRejection>,
) -> Result<Json<TodoRepresentation>, Response> {
    let payload = parse_body(payload)?;
    tracing::debug!(todo_id = id, payload = ?payload, "Received update todo request");

    let updated = state
        .todos
        .update_todo(id, payload)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(Json(updated))
}

/// Delete a todo by ID (DELETE /api/todos/{id}).
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "No todo with this id")
    )
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.todos.delete_todo_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
