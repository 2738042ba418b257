//! Error sanitization for client-facing messages.
//!
//! Prevents leaking internal details (hosts, driver errors) to clients while
//! keeping the full error in the logs under a correlation id.

use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::RepoError;

/// How much of a store failure a 500 response may reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorExposure {
    /// Generic message plus a correlation reference.
    #[default]
    Sanitized,
    /// Raw store error text. For local debugging only.
    Verbatim,
}

impl ErrorExposure {
    pub fn from_flag(expose_internal_errors: bool) -> Self {
        if expose_internal_errors {
            Self::Verbatim
        } else {
            Self::Sanitized
        }
    }
}

/// Sanitize a repository error.
///
/// Always logs the full error server-side; the returned string is what the
/// client sees.
pub fn sanitize_repo_error(error: &RepoError, operation: &str, exposure: ErrorExposure) -> String {
    let correlation_id = CorrelationId::new();
    tracing::error!(
        error = %error,
        operation = operation,
        correlation_id = %correlation_id,
        "Repository error"
    );

    match exposure {
        ErrorExposure::Sanitized => format!(
            "Failed to {} - please try again (ref {})",
            operation,
            correlation_id.short()
        ),
        ErrorExposure::Verbatim => error.detail().to_string(),
    }
}

/// Common error messages for client consumption.
pub mod messages {
    pub const API_LISTENING: &str = "API Listening";
    pub const MOVIE_UPDATED: &str = "Movie Successfully Updated";
    pub const MOVIE_DELETED: &str = "Movie Successfully Deleted";
    pub const ROUTE_NOT_FOUND: &str = "The requested resource was not found";
    pub const METHOD_NOT_ALLOWED: &str = "The requested method is not allowed for this resource";

    pub fn movie_not_found(id: &str) -> String {
        format!("Movie with id: {id} is not found")
    }

    pub fn movie_not_in_database(id: &str) -> String {
        format!("Movie with id: {id} is not in the database")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_message_hides_store_text() {
        let err = RepoError::database("movie.get", "connection refused to 10.0.0.5:27017");
        let msg = sanitize_repo_error(&err, "fetch movie", ErrorExposure::Sanitized);

        assert!(msg.starts_with("Failed to fetch movie - please try again (ref "));
        assert!(!msg.contains("10.0.0.5"));
    }

    #[test]
    fn verbatim_message_is_raw_detail() {
        let err = RepoError::database("movie.get", "connection refused");
        let msg = sanitize_repo_error(&err, "fetch movie", ErrorExposure::Verbatim);
        assert_eq!(msg, "connection refused");
    }

    #[test]
    fn exposure_flag_maps_to_variant() {
        assert_eq!(ErrorExposure::from_flag(false), ErrorExposure::Sanitized);
        assert_eq!(ErrorExposure::from_flag(true), ErrorExposure::Verbatim);
    }

    #[test]
    fn not_found_messages_match_routes() {
        assert_eq!(
            messages::movie_not_found("000000000000000000000000"),
            "Movie with id: 000000000000000000000000 is not found"
        );
        assert_eq!(
            messages::movie_not_in_database("abc"),
            "Movie with id: abc is not in the database"
        );
    }
}
