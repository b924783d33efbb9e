//! Response types for the Benefits Engine API.
//!
//! Every endpoint answers with an [`ApiResponse`] envelope. Failures are
//! produced through [`ApiErrorResponse`], which carries the HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Message returned when an employee ID is unknown.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Message returned when a dependent ID is unknown.
pub const DEPENDENT_NOT_FOUND: &str = "Dependent not found";

fn default_success() -> bool {
    true
}

/// The envelope wrapping every API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    #[serde(default = "default_success")]
    pub success: bool,
    /// Human-readable message, set on failures.
    pub message: Option<String>,
    /// The payload, set on success.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Creates a failed response carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The message placed in the envelope.
    pub message: String,
}

impl ApiErrorResponse {
    /// Creates a 404 response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Creates a 400 response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.message))).into_response()
    }
}
