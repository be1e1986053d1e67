//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Business failures
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Collaborator failures
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            AppError::Domain(domain_err) => match domain_err {
                // 400 Bad Request
                DomainError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "invalid_input", Some(msg.clone()))
                }
                DomainError::InvalidAmount(msg) => {
                    (StatusCode::BAD_REQUEST, "invalid_amount", Some(msg.clone()))
                }
                DomainError::SameAccount => {
                    (StatusCode::BAD_REQUEST, "same_account_transfer", None)
                }
                DomainError::InsufficientBalance { .. } => (
                    StatusCode::BAD_REQUEST,
                    "insufficient_balance",
                    Some(domain_err.to_string()),
                ),

                // 404 Not Found
                DomainError::AccountNotFound(number) => (
                    StatusCode::NOT_FOUND,
                    "account_not_found",
                    Some(number.clone()),
                ),

                // 409 Conflict - client may retry
                DomainError::GenerationExhausted { .. } => (
                    StatusCode::CONFLICT,
                    "account_number_exhausted",
                    Some(domain_err.to_string()),
                ),
            },

            AppError::Store(store_err) => match store_err {
                // 504 Gateway Timeout - bounded store call expired
                StoreError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "store_timeout", None),

                // 503 Service Unavailable
                StoreError::Unavailable(msg) => {
                    tracing::error!("Store unavailable: {}", msg);
                    (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", None)
                }

                // Collision retries are handled inside the engine; a leaked
                // duplicate-key error is a bug, not a client problem
                StoreError::DuplicateKey(key) => {
                    tracing::error!("Unhandled duplicate key: {}", key);
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
                }
            },

            // 500 Internal Server Error
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
