//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// No profile exists for the user; the caller must go through setup first.
    #[error("Profile required: {0}")]
    ProfileRequired(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ProfileRequired(_) | Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ProfileRequired(_) => "PROFILE_REQUIRED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns true for errors caused by the server rather than the request.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::ProfileRequired(String::new()).status_code(), 404);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::ProfileRequired(String::new()).error_code(),
            "PROFILE_REQUIRED"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::Conflict(String::new()).error_code(), "CONFLICT");
        assert_eq!(
            AppError::Database(String::new()).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::ProfileRequired("alice".into()).to_string(),
            "Profile required: alice"
        );
        assert_eq!(
            AppError::Conflict("Username already exists".into()).to_string(),
            "Conflict: Username already exists"
        );
        assert_eq!(
            AppError::Database("msg".into()).to_string(),
            "Database error: msg"
        );
    }

    #[test]
    fn test_server_error_split() {
        assert!(AppError::Database(String::new()).is_server_error());
        assert!(!AppError::Validation(String::new()).is_server_error());
        assert!(!AppError::ProfileRequired(String::new()).is_server_error());
    }
}
