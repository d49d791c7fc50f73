//! Machine-readable API description.

use axum::Json;
use utoipa::OpenApi;

use todolist_core::todo::TodoRepresentation;

use super::todos;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "To-Do List API",
        version = "1.0.0",
        description = "This is a RESTful API for managing To-Do tasks."
    ),
    paths(
        todos::list_todos,
        todos::get_todo,
        todos::create_todo,
        todos::update_todo,
        todos::delete_todo
    ),
    components(schemas(TodoRepresentation)),
    tags((name = "todos", description = "To-do CRUD operations"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json (also /v3/api-docs) - OpenAPI document for the todo routes.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/api/todos/getAll"));
        assert!(paths.contains(&"/api/todos/create"));
        assert!(paths.contains(&"/api/todos/{id}"));
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_document_info() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "To-Do List API");
        assert_eq!(doc.info.version, "1.0.0");
    }
}
