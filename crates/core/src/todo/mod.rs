mod error;
mod operations;
mod types;

pub use error::TodoError;
pub use operations::{replace_fields, to_new_todo, to_representation, validate_representation};
pub use types::{NewTodo, Todo, TodoRepresentation};
