use super::error::TodoError;
use super::types::{NewTodo, Todo, TodoRepresentation};

/// Converts a stored to-do into its public shape, dropping the identifier.
pub fn to_representation(todo: &Todo) -> TodoRepresentation {
    TodoRepresentation {
        title: todo.title.clone(),
        description: todo.description.clone(),
        completed: todo.completed,
    }
}

/// Converts an incoming payload into a to-do ready for insertion.
pub fn to_new_todo(repr: TodoRepresentation) -> NewTodo {
    let new_todo = match repr.title {
        Some(title) => NewTodo::new(title),
        None => NewTodo::default(),
    };
    let new_todo = match repr.description {
        Some(description) => new_todo.with_description(description),
        None => new_todo,
    };
    new_todo.with_completed(repr.completed)
}

/// Overwrites every mutable field of `todo` with the payload.
///
/// This is a full replace: a field absent from the payload becomes
/// `None` / `false` rather than keeping its previous value.
pub fn replace_fields(todo: Todo, repr: TodoRepresentation) -> Todo {
    Todo {
        id: todo.id,
        title: repr.title,
        description: repr.description,
        completed: repr.completed,
    }
}

/// Validates a payload before it reaches storage.
///
/// Every payload is currently accepted, including empty or missing titles.
pub fn validate_representation(_repr: &TodoRepresentation) -> Result<(), TodoError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Todo {
        Todo {
            id: 7,
            title: Some("Buy milk".to_string()),
            description: Some("2%".to_string()),
            completed: false,
        }
    }

    #[test]
    fn test_to_representation_copies_fields() {
        let repr = to_representation(&stored());

        assert_eq!(repr.title.as_deref(), Some("Buy milk"));
        assert_eq!(repr.description.as_deref(), Some("2%"));
        assert!(!repr.completed);
    }

    #[test]
    fn test_to_new_todo_copies_fields() {
        let new_todo = to_new_todo(TodoRepresentation {
            title: Some("Walk dog".to_string()),
            description: None,
            completed: true,
        });

        assert_eq!(new_todo, NewTodo::new("Walk dog").with_completed(true));
    }

    #[test]
    fn test_to_new_todo_without_title() {
        let new_todo = to_new_todo(TodoRepresentation {
            title: None,
            description: Some("no title".to_string()),
            completed: false,
        });

        assert_eq!(new_todo.title, None);
        assert_eq!(new_todo.description.as_deref(), Some("no title"));
        assert!(!new_todo.completed);
    }

    #[test]
    fn test_replace_fields_keeps_id() {
        let updated = replace_fields(
            stored(),
            TodoRepresentation {
                title: Some("Buy milk".to_string()),
                description: Some("skim".to_string()),
                completed: true,
            },
        );

        assert_eq!(updated.id, 7);
        assert_eq!(updated.description.as_deref(), Some("skim"));
        assert!(updated.completed);
    }

    #[test]
    fn test_replace_fields_does_not_merge() {
        let updated = replace_fields(
            stored(),
            TodoRepresentation {
                title: None,
                description: None,
                completed: false,
            },
        );

        assert_eq!(updated.title, None);
        assert_eq!(updated.description, None);
    }

    #[test]
    fn test_validate_accepts_empty_title() {
        let repr = TodoRepresentation {
            title: Some(String::new()),
            ..TodoRepresentation::default()
        };

        assert_eq!(validate_representation(&repr), Ok(()));
    }
}
