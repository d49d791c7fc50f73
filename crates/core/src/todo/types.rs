use serde::{Deserialize, Serialize};

/// A to-do item as it lives in storage.
///
/// The identifier is assigned by the storage layer on insert and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
}

/// A to-do item that has not been persisted yet, so it has no identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTodo {
    /// Creates an incomplete to-do with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Attaches the identifier assigned by storage.
    pub fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

/// Public JSON shape of a to-do item.
///
/// Never carries the identifier: it only travels in the URL path. Missing,
/// `null` or mistyped fields deserialize to `null` / `false` or are coerced
/// (see [`crate::serde`]), and unknown fields (including a client-supplied
/// `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct TodoRepresentation {
    /// Short title, e.g. "Buy milk".
    #[serde(deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub description: Option<String>,
    /// Whether the item is done.
    #[serde(deserialize_with = "crate::serde::deserialize_lenient_bool")]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_builder() {
        let todo = NewTodo::new("Buy milk")
            .with_description("2%")
            .with_completed(true);

        assert_eq!(todo.title.as_deref(), Some("Buy milk"));
        assert_eq!(todo.description.as_deref(), Some("2%"));
        assert!(todo.completed);
    }

    #[test]
    fn test_into_todo_attaches_id() {
        let todo = NewTodo::new("Buy milk").into_todo(3);

        assert_eq!(todo.id, 3);
        assert_eq!(todo.title.as_deref(), Some("Buy milk"));
        assert_eq!(todo.description, None);
        assert!(!todo.completed);
    }

    #[test]
    fn test_representation_serializes_without_id() {
        let repr = TodoRepresentation {
            title: Some("Buy milk".to_string()),
            description: Some("2%".to_string()),
            completed: false,
        };

        let json = serde_json::to_value(&repr).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"title": "Buy milk", "description": "2%", "completed": false})
        );
    }

    #[test]
    fn test_representation_missing_fields_default() {
        let repr: TodoRepresentation = serde_json::from_str("{}").unwrap();

        assert_eq!(repr, TodoRepresentation::default());
        assert_eq!(repr.title, None);
        assert!(!repr.completed);
    }

    #[test]
    fn test_representation_ignores_client_id() {
        let repr: TodoRepresentation =
            serde_json::from_str(r#"{"id": 42, "title": "Walk dog", "completed": true}"#).unwrap();

        assert_eq!(repr.title.as_deref(), Some("Walk dog"));
        assert_eq!(repr.description, None);
        assert!(repr.completed);
    }

    #[test]
    fn test_representation_coerces_mistyped_fields() {
        let repr: TodoRepresentation = serde_json::from_str(
            r#"{"title": 5, "description": null, "completed": "true"}"#,
        )
        .unwrap();

        assert_eq!(repr.title.as_deref(), Some("5"));
        assert_eq!(repr.description, None);
        assert!(repr.completed);

        let repr: TodoRepresentation =
            serde_json::from_str(r#"{"title": "Buy milk", "completed": null}"#).unwrap();
        assert!(!repr.completed);
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let json = serde_json::to_string(&TodoRepresentation::default()).unwrap();

        assert_eq!(
            json,
            r#"{"title":null,"description":null,"completed":false}"#
        );
    }
}
