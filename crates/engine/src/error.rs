use thiserror::Error;

/// Errors surfaced by the grid engine.
///
/// Everything here is recoverable: the caller fixes the input and retries.
/// Nothing in the engine panics.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no table loaded")]
    NoTable,

    #[error("no baseline snapshot captured")]
    NoBaseline,

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column '{column}' is not editable ({reason})")]
    NonEditableColumn { column: String, reason: String },

    #[error("cell {row}:{column} already has an active edit")]
    EditInProgress { row: usize, column: String },

    #[error("no active edit for cell {row}:{column}")]
    NoActiveEdit { row: usize, column: String },

    #[error("row index {0} out of range")]
    RowOutOfRange(usize),

    #[error("cannot load more rows while added rows are pending")]
    PendingAdditions,

    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("row provider error: {0}")]
    Provider(String),
}

impl GridError {
    /// Validation messages, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            GridError::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}
