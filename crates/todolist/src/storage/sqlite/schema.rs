//! SQLite schema definitions and SQL query constants.

/// SQL statement to create the todos table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    description TEXT,
    completed INTEGER NOT NULL DEFAULT 0
);
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, description, completed)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, title, description, completed
FROM todos
WHERE id = ?1
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, title, description, completed
FROM todos
ORDER BY id ASC
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET title = ?2, description = ?3, completed = ?4
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_uses_autoincrement_key() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS todos"));
        assert!(CREATE_TABLES.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_TODO.contains("INSERT"));
        assert!(SELECT_TODO_BY_ID.contains("WHERE id = ?1"));
        assert!(SELECT_ALL_TODOS.contains("SELECT"));
        assert!(UPDATE_TODO.contains("UPDATE"));
        assert!(DELETE_TODO.contains("DELETE"));
    }
}
