//! API error types and HTTP mapping.
//!
//! Three buckets, per the error taxonomy:
//! - validation → 400 with field-level details
//! - not-found → 404 with a message
//! - everything else → 500 with a generic message; detail goes to the log,
//!   never to the caller

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Result alias for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Offending request field (wire name).
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

/// An error response carried out of a handler.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    errors: Vec<FieldError>,
    /// Internal detail, logged but never serialized.
    detail: Option<String>,
}

impl ApiError {
    /// 400 with field-level details.
    pub fn validation<S: Into<String>>(message: S, errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            errors,
            detail: None,
        }
    }

    /// 404 with a message.
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            errors: Vec::new(),
            detail: None,
        }
    }

    /// 500 with a generic public message; `detail` is only logged.
    pub fn internal<S: Into<String>>(detail: S) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            errors: Vec::new(),
            detail: Some(detail.into()),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<drplan_core::Error> for ApiError {
    fn from(err: drplan_core::Error) -> Self {
        match err {
            drplan_core::Error::Validation { field, message } => {
                let errors = field
                    .map(|field| {
                        vec![FieldError {
                            field,
                            message: message.clone(),
                        }]
                    })
                    .unwrap_or_default();
                ApiError::validation(message, errors)
            }
            drplan_core::Error::NotFound { .. } => ApiError::not_found(err.to_string()),
            other => ApiError::internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                detail = self.detail.as_deref().unwrap_or("none"),
                "request failed"
            );
        }
        let body = ErrorBody {
            message: &self.message,
            errors: self.errors,
        };
        (self.status, Json(body)).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
