//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid credential")]
    InvalidCredential,

    // Authorization errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    // Input errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Referential(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::AccessDenied(_) => "ACCESS_DENIED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Referential(_) => "REFERENTIAL_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) | Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) | Self::Referential(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) | Self::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Shorthand for a missing required field
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{} is required", field.replace('_', " ")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::Configuration(e) => {
                tracing::error!("Configuration error: {}", e);
                "A configuration error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Constraint violations are the authority for uniqueness and references,
// so they map onto the same kinds the pre-checks produce.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    AppError::Conflict(conflict_message(db_err.constraint()))
                } else if db_err.is_foreign_key_violation() {
                    AppError::Referential("Invalid reference data provided".to_string())
                } else if db_err.is_check_violation() {
                    AppError::Validation("Value out of the accepted range".to_string())
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

fn conflict_message(constraint: Option<&str>) -> String {
    match constraint {
        Some("programs_code_unique") => "A program with this code already exists",
        Some("modules_program_name_unique") => {
            "A module with this name already exists in the selected program"
        }
        Some("lecture_assignments_triple_unique") => "This assignment already exists",
        Some("users_email_unique") => "User already exists with this email",
        _ => "Resource already exists",
    }
    .to_string()
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        AppError::InvalidCredential
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::AccessDenied("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Referential("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_forbidden_and_access_denied_have_distinct_codes() {
        assert_eq!(AppError::Forbidden("x".into()).error_code(), "FORBIDDEN");
        assert_eq!(AppError::AccessDenied("x".into()).error_code(), "ACCESS_DENIED");
    }

    #[test]
    fn test_required_field_message() {
        let err = AppError::required("week_of_reporting");
        assert_eq!(err.to_string(), "week of reporting is required");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_conflict_messages_follow_constraint_names() {
        assert_eq!(
            conflict_message(Some("lecture_assignments_triple_unique")),
            "This assignment already exists"
        );
        assert_eq!(conflict_message(None), "Resource already exists");
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        let response = AppError::Database("relation \"secret\" missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        assert_eq!(body["error"]["message"], "A database error occurred");
    }
}
