//! Error types for the photo gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Cache store connectivity or command failure
    #[error("Cache store error: {0}")]
    Store(String),

    /// Cached value could not be encoded or decoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Upstream request failed or returned a non-success status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for GatewayError {
    fn from(err: redis::RedisError) -> Self {
        GatewayError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
// Every failure is rendered the same way; callers only learn that the request failed.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
