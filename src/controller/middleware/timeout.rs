//! Cuts requests off after `timeout` milliseconds with `408 Request Timeout`.

use std::time::Duration;

use axum::{http::StatusCode, Router};
use serde::{Deserialize, Serialize};
use tower_http::timeout::TimeoutLayer;

use super::MiddlewareLayer;
use crate::{app::AppContext, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Timeout {
    #[serde(default)]
    pub enable: bool,
    /// Milliseconds.
    #[serde(default = "Timeout::default_millis")]
    pub timeout: u64,
}

impl Timeout {
    const fn default_millis() -> u64 {
        5_000
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self {
            enable: false,
            timeout: Self::default_millis(),
        }
    }
}

impl MiddlewareLayer for Timeout {
    fn name(&self) -> &'static str {
        "timeout_request"
    }

    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn apply(&self, router: Router<AppContext>) -> Result<Router<AppContext>> {
        Ok(router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(self.timeout),
        )))
    }
}
