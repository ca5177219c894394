//! Response helpers shared by handlers.
//!
//! ```rust
//! use notes_api::prelude::*;
//!
//! async fn remove() -> Result<Response> {
//!     format::empty()
//! }
//! ```

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::{controller::Json, Result};

/// `200 OK` without a body.
///
/// # Errors
///
/// Never fails; returns `Result` to sit at the tail of a handler.
pub fn empty() -> Result<Response> {
    Ok(().into_response())
}

/// `200 OK` with `data` serialized as JSON.
///
/// # Errors
///
/// Never fails; returns `Result` to sit at the tail of a handler.
pub fn json<T: Serialize>(data: T) -> Result<Response> {
    Ok(Json(data).into_response())
}
