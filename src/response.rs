//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Message carried by every success envelope.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Uniform body returned by every inventory operation. The success and failure
/// shapes are separate variants, so a response never carries both `result` and `errorType`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    #[serde(rename_all = "camelCase")]
    Success {
        status_code: String,
        status_message: String,
        result: T,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        status_code: String,
        status_message: String,
        error_type: String,
    },
}

impl<T> ApiResponse<T> {
    pub fn status_code(&self) -> &str {
        match self {
            ApiResponse::Success { status_code, .. } | ApiResponse::Error { status_code, .. } => {
                status_code.as_str()
            }
        }
    }

    pub fn status_message(&self) -> &str {
        match self {
            ApiResponse::Success { status_message, .. } | ApiResponse::Error { status_message, .. } => {
                status_message.as_str()
            }
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { result, .. } => Some(result),
            ApiResponse::Error { .. } => None,
        }
    }

    pub fn error_type(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Error { error_type, .. } => Some(error_type.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }
}

/// Envelope plus the status to report at the transport boundary.
pub type Wrapped<T> = (StatusCode, Json<ApiResponse<T>>);

/// Upper-snake name of a status, e.g. `201` -> `CREATED`, `500` -> `INTERNAL_SERVER_ERROR`.
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .filter(|c| *c != '\'')
            .collect(),
        None => status.as_u16().to_string(),
    }
}

pub fn wrap_success<T: Serialize>(result: T, status: StatusCode) -> Wrapped<T> {
    (
        status,
        Json(ApiResponse::Success {
            status_code: status_name(status),
            status_message: SUCCESS_MESSAGE.to_string(),
            result,
        }),
    )
}

pub fn wrap_error<T>(message: &str, detail: impl Into<String>, status: StatusCode) -> Wrapped<T> {
    (
        status,
        Json(ApiResponse::Error {
            status_code: status_name(status),
            status_message: message.to_string(),
            error_type: detail.into(),
        }),
    )
}
