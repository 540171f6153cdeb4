//! API error handling
//!
//! Every handler failure converts at the boundary into a structured JSON
//! error response. Field validation problems return 400 before any remote
//! call; everything else returns 500 with upstream details attached when
//! the provider supplied them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::CustomerId;
use domain_finance::PortError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Upstream provider error")]
    Upstream { detail: Option<String> },

    #[error("Customer {customer_id} created but payment creation failed")]
    PartialWrite {
        customer_id: CustomerId,
        detail: Option<String>,
    },

    #[error("Expense store error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Wraps the failed second write of the customer-plus-payment path,
    /// keeping hold of the orphaned customer id
    pub fn partial_write(customer_id: CustomerId, source: PortError) -> Self {
        ApiError::PartialWrite {
            customer_id,
            detail: source.upstream_detail().or_else(|| Some(source.to_string())),
        }
    }

    /// Flattens validator output into per-field messages
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    match &e.message {
                        Some(message) => format!("{field}: {message}"),
                        None => format!("{field}: {}", e.code),
                    }
                })
            })
            .collect();
        details.sort();
        ApiError::Validation(details)
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Upstream { .. } => ApiError::Upstream {
                detail: err.upstream_detail(),
            },
            PortError::Connection(message) | PortError::Decode(message) => ApiError::Upstream {
                detail: Some(message),
            },
            PortError::Storage(message) => ApiError::Store(message),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Required fields are missing or invalid".to_string(),
                Some(details),
            ),
            ApiError::Upstream { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "upstream_error",
                "The billing provider call failed".to_string(),
                detail.map(|d| vec![d]),
            ),
            ApiError::PartialWrite {
                customer_id,
                detail,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "partial_write",
                format!(
                    "Customer {customer_id} was created but the payment was not; no rollback was performed"
                ),
                detail.map(|d| vec![d]),
            ),
            ApiError::Store(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                message,
                None,
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
