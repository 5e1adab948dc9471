//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations.
///
/// Every board operation that returns an error has left the board untouched.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task is not a member of the named column
    #[error("task '{task}' is not in column '{column}'")]
    TaskNotInColumn { task: String, column: String },

    /// The "insert before" target is not in the destination list
    #[error("drop target '{target}' not found in {list}")]
    DropTargetNotFound { target: String, list: String },

    /// An item was dropped onto itself
    #[error("cannot drop '{id}' relative to itself")]
    SelfReference { id: String },

    /// Title is empty after trimming
    #[error("{item_type} title cannot be empty")]
    EmptyTitle { item_type: String },

    /// Board invariant violated
    #[error("board integrity violation: {message}")]
    Integrity { message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl KanbanError {
    /// Create an empty title error
    pub fn empty_title(item_type: impl Into<String>) -> Self {
        Self::EmptyTitle {
            item_type: item_type.into(),
        }
    }

    /// Create an integrity error
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
        }
    }

    /// Create a self reference error
    pub fn self_reference(id: impl ToString) -> Self {
        Self::SelfReference { id: id.to_string() }
    }

    /// Whether this error is rejected user input rather than an environmental failure.
    ///
    /// Rejections are no-ops: the caller may ignore them.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::TaskNotInColumn { .. }
                | Self::DropTargetNotFound { .. }
                | Self::SelfReference { .. }
                | Self::EmptyTitle { .. }
        )
    }
}

impl From<figment::Error> for KanbanError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}
