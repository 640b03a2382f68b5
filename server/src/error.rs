//! HTTP error mapping for the todo API.
//!
//! # Design
//! Handlers return `Result<_, ApiError>` and use `?` on store calls. A
//! missing todo becomes 404; every store fault becomes a generic 500 whose
//! body never carries the underlying message. The fault itself is logged.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Todo not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested id has no todo.
    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] StoreError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    fn response(status: StatusCode, message: &str) -> Response {
        let body = ErrorBody {
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => ErrorBody::response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "store operation failed");
                ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

/// Response for a handler that panicked. Installed through
/// `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "handler panicked");
    ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
