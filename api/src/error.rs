//! Unified error types for the douga API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `ShopifyError`: Shopify Admin API client errors
//! - `SecretError`: Secret store errors
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Shopify Admin API client errors
#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid access token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Secret store errors
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Permission denied for secret: {0}")]
    PermissionDenied(String),

    #[error("Metadata server error: {0}")]
    Metadata(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid secret payload: {0}")]
    Payload(String),
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    #[error("Secret error: {0}")]
    Secret(#[from] SecretError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures keep their message in `details`
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Shopify(e) => {
                tracing::error!("Shopify error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Shopify product creation failed",
                    Some(e.to_string()),
                )
            }
            AppError::Secret(e) => {
                tracing::error!("Secret error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get Shopify access token",
                    Some(e.to_string()),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(msg.clone()),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
