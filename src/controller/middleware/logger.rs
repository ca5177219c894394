//! One `tracing` span per request.

use axum::{extract::Request, http::header::USER_AGENT, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use super::MiddlewareLayer;
use crate::{app::AppContext, environment::Environment, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestLogger {
    pub enable: bool,
    /// Recorded on every span; filled in from the running environment.
    #[serde(skip)]
    pub environment: String,
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self {
            enable: true,
            environment: String::new(),
        }
    }
}

impl RequestLogger {
    #[must_use]
    pub fn for_environment(mut self, environment: &Environment) -> Self {
        self.environment = environment.to_string();
        self
    }
}

impl MiddlewareLayer for RequestLogger {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn apply(&self, router: Router<AppContext>) -> Result<Router<AppContext>> {
        let environment = self.environment.clone();
        Ok(
            router.layer(TraceLayer::new_for_http().make_span_with(move |request: &Request| {
                let user_agent = request
                    .headers()
                    .get(USER_AGENT)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();

                tracing::info_span!(
                    "request",
                    http.method = %request.method(),
                    http.uri = %request.uri(),
                    http.user_agent = user_agent,
                    environment = %environment,
                )
            })),
        )
    }
}
