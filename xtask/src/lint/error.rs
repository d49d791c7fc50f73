//! Error types for lint operations.

use thiserror::Error;

/// Result type alias for the lint module.
pub type Result<T> = std::result::Result<T, LintError>;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("One or more lint checks failed")]
    ChecksFailed,

    #[error("Command not found: {command}\n{help}")]
    CommandNotFound { command: String, help: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fails with [`LintError::CommandNotFound`] when `command` is not on PATH.
pub fn require_command(command: &str, help: &str) -> Result<()> {
    if !crate::prelude::command_exists(command) {
        return Err(LintError::CommandNotFound {
            command: command.to_string(),
            help: help.to_string(),
        });
    }
    Ok(())
}
