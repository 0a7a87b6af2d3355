//! Gaslamp mystery engine — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gaslamp_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error crossing the boundary.
    Domain(DomainError),
    /// The draft-validate cycle produced no character for an explicit
    /// drafting request. Inside questioning the same outcome is absorbed;
    /// here producing the one character was the whole job.
    DraftNotProduced,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            Self::Domain(err) => {
                let (status, code) = match err {
                    DomainError::CaseNotFound(_) => (StatusCode::NOT_FOUND, "case_not_found"),
                    DomainError::CharacterNotFound(_) => {
                        (StatusCode::NOT_FOUND, "character_not_found")
                    }
                    DomainError::Generator(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "generator_failure")
                    }
                    DomainError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
                };
                (status, code, err.to_string())
            }
            Self::DraftNotProduced => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "character_not_produced",
                "the drafted character was unusable or failed validation".to_owned(),
            ),
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}
