//! HTTP layer: route tables, the JSON extractor, middlewares and the mapping
//! of [`Error`] onto status codes.
//!
//! Every error body has the same shape:
//!
//! ```json
//! {"error": "validation_error", "description": "content: content is required", "errors": {...}}
//! ```

use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub use self::routes::{AppRoutes, RouteInfo, Routes};
use crate::{errors::Error, model::ModelError};

mod describe;
pub mod format;
mod health;
pub mod middleware;
mod routes;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub error: &'static str,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ErrorDetail {
    fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// `axum::Json` whose rejection becomes an [`Error`], so malformed bodies get
/// the regular JSON error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// The `500` answer, also used when a handler panics.
pub(crate) fn internal_error() -> Response {
    ErrorDetail {
        error: "internal_server_error",
        description: "Internal Server Error".to_string(),
        errors: None,
    }
    .respond(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Model(ModelError::EntityNotFound) => ErrorDetail {
                error: "not_found",
                description: self.to_string(),
                errors: None,
            }
            .respond(StatusCode::NOT_FOUND),
            Self::Model(ModelError::Validation(failures)) => ErrorDetail {
                error: "validation_error",
                description: failures.summary(),
                errors: serde_json::to_value(&failures.errors).ok(),
            }
            .respond(StatusCode::BAD_REQUEST),
            Self::JsonRejection(rejection) => ErrorDetail {
                error: "bad_request",
                description: rejection.body_text(),
                errors: None,
            }
            .respond(StatusCode::BAD_REQUEST),
            err => {
                tracing::error!(error.msg = %err, error.details = ?err, "request failed");
                internal_error()
            }
        }
    }
}
