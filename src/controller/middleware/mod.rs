//! Layers wrapped around every route.
//!
//! Each one reads its switch from `server.middlewares` in the configuration:
//!
//! ```yaml
//! server:
//!   middlewares:
//!     catch_panic:
//!       enable: true
//!     timeout_request:
//!       enable: true
//!       timeout: 5000
//!     logger:
//!       enable: true
//! ```

pub mod catch_panic;
pub mod logger;
pub mod timeout;

use axum::Router;
use serde::{Deserialize, Serialize};

use crate::{app::AppContext, Result};

/// A configurable tower layer.
pub trait MiddlewareLayer {
    fn name(&self) -> &'static str;

    fn is_enabled(&self) -> bool;

    /// Wrap `router` in this layer.
    ///
    /// # Errors
    ///
    /// When the layer cannot be built from its configuration.
    fn apply(&self, router: Router<AppContext>) -> Result<Router<AppContext>>;
}

/// The `server.middlewares` section. Missing entries take their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Middlewares {
    pub catch_panic: catch_panic::CatchPanic,
    pub timeout_request: timeout::Timeout,
    pub logger: logger::RequestLogger,
}

/// Layers in application order: the last one is outermost.
#[must_use]
pub fn default_middleware_stack(ctx: &AppContext) -> Vec<Box<dyn MiddlewareLayer>> {
    let configured = &ctx.config.server.middlewares;
    vec![
        Box::new(configured.catch_panic.clone()),
        Box::new(configured.timeout_request.clone()),
        Box::new(configured.logger.clone().for_environment(&ctx.environment)),
    ]
}
