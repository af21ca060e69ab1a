//! Unified HTTP error handling
//!
//! Maps domain errors to API status codes and a stable response envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::shipments::ShipmentError;

/// Unified API error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("Upstream service failed: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),
            AppError::PaymentRequired(msg) => {
                (StatusCode::PAYMENT_REQUIRED, "E0402", msg.clone())
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "E0502", msg.clone()),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            code: code.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<ShipmentError> for AppError {
    fn from(err: ShipmentError) -> Self {
        match &err {
            ShipmentError::NotFound(_) => AppError::NotFound(err.to_string()),
            ShipmentError::InvalidTransition { .. }
            | ShipmentError::AlreadyRegistered(_)
            | ShipmentError::RegistrationInProgress(_) => AppError::Conflict(err.to_string()),
            ShipmentError::PaymentNotConfirmed => AppError::PaymentRequired(err.to_string()),
            ShipmentError::Generator(_) => AppError::Upstream(err.to_string()),
            ShipmentError::DuplicateId(_) | ShipmentError::Storage(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}
