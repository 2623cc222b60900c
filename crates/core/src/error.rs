//! Error types for the Prism record services
//!
//! Every fallible service operation returns a [`ServiceError`]. The messages
//! are user-presentable: the management view shows them verbatim in its error
//! banner when an operation fails.

use thiserror::Error;

/// The error type shared by both record services
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A required field was blank or otherwise rejected
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No record exists with the given identifier
    #[error("No record found with id {0}")]
    NotFound(u64),

    /// The service could not be reached
    ///
    /// The in-memory services never produce this on their own; it exists so
    /// tests and demos can exercise the view's load-failure path.
    #[error("Service unavailable")]
    Unavailable,
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::Validation("Username is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: Username is required");

        let err = ServiceError::NotFound(42);
        assert_eq!(err.to_string(), "No record found with id 42");

        assert_eq!(ServiceError::Unavailable.to_string(), "Service unavailable");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ServiceError::NotFound(1), ServiceError::NotFound(1));
        assert_ne!(ServiceError::NotFound(1), ServiceError::NotFound(2));
    }
}
