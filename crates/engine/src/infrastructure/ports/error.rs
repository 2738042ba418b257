//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored document could not be converted to or from a movie.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Underlying store text, without the operation prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Database { message, .. } => message,
            Self::Serialization(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_operation() {
        let err = RepoError::database("movie.insert", "connection refused");
        assert_eq!(
            err.to_string(),
            "Database error in movie.insert: connection refused"
        );
        assert_eq!(err.detail(), "connection refused");
    }

    #[test]
    fn serialization_detail_is_raw_message() {
        let err = RepoError::serialization("missing _id");
        assert_eq!(err.detail(), "missing _id");
        assert_eq!(err.to_string(), "Serialization error: missing _id");
    }
}
