//! Error types for the borrowal server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes returned in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    ConnectionFailure = 3,
    NoSuchStudent = 4,
    NoSuchRecord = 5,
    NoSuchFine = 6,
    BadValue = 7,
    StateConflict = 8,
    NoSuchData = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing entity, with the entity-specific code (NoSuchStudent,
    /// NoSuchRecord, NoSuchFine, or NoSuchData for anything else)
    #[error("Not found: {1}")]
    NotFound(ErrorCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("State conflict: {0}")]
    StateConflict(String),

    #[error("Database unavailable: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(code, msg) => (StatusCode::NOT_FOUND, *code, msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::StateConflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::StateConflict, msg.clone())
            }
            AppError::Connection(msg) => {
                tracing::warn!("Database unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ConnectionFailure,
                    "Database unavailable".to_string(),
                )
            }
            AppError::Database(e) => match e {
                // The pool is created lazily; an unreachable database shows
                // up here at point of use, not at startup.
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut => {
                    tracing::warn!("Database unreachable: {:?}", e);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ErrorCode::ConnectionFailure,
                        "Database unavailable".to_string(),
                    )
                }
                _ => {
                    tracing::error!("Database error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::DbFailure,
                        "Database error".to_string(),
                    )
                }
            },
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
