//! Turns a panicking handler into a logged `500` with the usual error body.

use std::any::Any;

use axum::{response::Response, Router};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;

use super::MiddlewareLayer;
use crate::{app::AppContext, controller, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatchPanic {
    pub enable: bool,
}

impl Default for CatchPanic {
    fn default() -> Self {
        Self { enable: true }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn recover(payload: Box<dyn Any + Send + 'static>) -> Response {
    let reason = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic.reason = reason, "handler panicked");

    controller::internal_error()
}

impl MiddlewareLayer for CatchPanic {
    fn name(&self) -> &'static str {
        "catch_panic"
    }

    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn apply(&self, router: Router<AppContext>) -> Result<Router<AppContext>> {
        Ok(router.layer(CatchPanicLayer::custom(recover)))
    }
}
