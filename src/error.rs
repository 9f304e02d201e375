//! Error types for row selection.

/// Result type alias for selector operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Errors raised while building or applying a row selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// A constraint on `n` / `offset` was violated, either on its own or
    /// relative to the row count of the data.
    #[error("{0}")]
    InvalidArgument(String),

    /// The data handed to a selector has no registered adaptation.
    #[error("row selection is not implemented for data of type `{type_name}`")]
    UnsupportedRepresentation {
        /// Fully-qualified name of the rejected type.
        type_name: &'static str,
    },
}

impl SelectError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SelectError::InvalidArgument(msg.into())
    }

    /// The human-readable message for `InvalidArgument`, if this is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            SelectError::InvalidArgument(msg) => Some(msg),
            SelectError::UnsupportedRepresentation { .. } => None,
        }
    }
}
