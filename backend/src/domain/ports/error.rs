//! Shared error taxonomy for repository ports.

use crate::domain::Error;

/// Failures surfaced by repository implementations.
///
/// Adapters map backend-specific failures (pool checkout, SQL errors,
/// constraint violations) into this taxonomy so the domain and the HTTP
/// layer stay storage-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The storage backend could not be reached.
    #[error("repository connection error: {message}")]
    Connection { message: String },

    /// A query failed for a reason other than missing data.
    #[error("repository query error: {message}")]
    Query { message: String },

    /// The write conflicts with existing state, such as a uniqueness
    /// constraint violation.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// No record matches the requested key.
    #[error("record not found")]
    NotFound,
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Connection { .. } | RepositoryError::Query { .. } => {
                Self::internal(err.to_string())
            }
            RepositoryError::Conflict { message } => Self::conflict(message),
            RepositoryError::NotFound => Self::not_found("record not found"),
        }
    }
}
