//! Typed errors and HTTP mapping.

use crate::response::wrap_error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown store backend: {0} (expected postgres or memory)")]
    UnknownBackend(String),
}

/// Errors raised before the inventory service runs (request shape, field constraints)
/// or while bootstrapping the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    InvalidId(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Malformed request"),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid id"),
            AppError::Config(_) | AppError::Db(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };
        wrap_error::<()>(message, self.to_string(), status).into_response()
    }
}

/// Classification of a store failure. Every kind currently renders as the same
/// internal-error envelope; the kind is kept for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    StoreUnavailable,
    ConstraintViolation,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::StoreUnavailable => "store_unavailable",
            ErrorKind::ConstraintViolation => "constraint_violation",
            ErrorKind::Unknown => "unknown",
        }
    }
}

/// Failure raised by an [`ItemStore`](crate::store::ItemStore) call.
/// Display yields only the underlying description; it becomes the envelope's `errorType`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub kind: ErrorKind,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        let kind = match &e {
            sqlx::Error::RowNotFound => ErrorKind::NotFound,
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => ErrorKind::StoreUnavailable,
            sqlx::Error::Database(db) => {
                if db.is_unique_violation() || db.is_foreign_key_violation() || db.is_check_violation() {
                    ErrorKind::ConstraintViolation
                } else {
                    ErrorKind::Unknown
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => ErrorKind::Validation,
            _ => ErrorKind::Unknown,
        };
        StoreError::new(kind, e.to_string())
    }
}
