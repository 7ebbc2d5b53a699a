//! Error types for genz-todo.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised by the dispatcher for an id argument that is not a number.
    #[error("Invalid ID: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
