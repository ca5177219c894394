//! Route tables.
//!
//! A controller exposes its endpoints as [`Routes`], relative to an optional
//! prefix; [`AppRoutes`] stacks the controllers under an application-wide
//! prefix and turns them into an [`axum::Router`].
//!
//! ```rust
//! use notes_api::prelude::*;
//!
//! async fn list() -> Result<Response> {
//!     format::json(Vec::<String>::new())
//! }
//!
//! let routes = AppRoutes::empty()
//!     .prefix("/api")
//!     .add_route(Routes::new().prefix("notes").add("/", get(list)));
//! assert_eq!(routes.collect()[0].uri, "/api/notes");
//! ```

use std::fmt;

use axum::{http::Method, routing::MethodRouter, Router};

use super::{describe, health, middleware::MiddlewareLayer};
use crate::{app::AppContext, Result};

/// Endpoints of one controller.
#[derive(Clone, Default, Debug)]
pub struct Routes {
    pub prefix: Option<String>,
    pub handlers: Vec<(String, MethodRouter<AppContext>)>,
}

impl Routes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Mount `method` at `uri`, relative to the prefix. Several calls with the
    /// same `uri` and different methods end up on one path.
    #[must_use]
    pub fn add(mut self, uri: &str, method: MethodRouter<AppContext>) -> Self {
        self.handlers.push((uri.to_string(), method));
        self
    }
}

/// One mounted endpoint, as printed by `notes-api routes`.
#[derive(Debug)]
pub struct RouteInfo {
    pub uri: String,
    pub methods: Vec<Method>,
    router: MethodRouter<AppContext>,
}

impl fmt::Display for RouteInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<&str> = self.methods.iter().map(Method::as_str).collect();
        write!(f, "[{}] {}", methods.join(","), self.uri)
    }
}

/// Every controller of the application.
#[derive(Clone, Debug, Default)]
pub struct AppRoutes {
    prefix: Option<String>,
    routes: Vec<Routes>,
}

/// Join path segments with single slashes, without a trailing one.
fn join_uri(parts: &[&str]) -> String {
    let segments: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

impl AppRoutes {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts with the `/_ping` and `/_health` endpoints.
    #[must_use]
    pub fn with_default_routes() -> Self {
        Self::empty().add_route(health::routes())
    }

    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    #[must_use]
    pub fn add_route(mut self, routes: Routes) -> Self {
        self.routes.push(routes);
        self
    }

    /// Flatten into full URIs, in registration order. Handlers registered on
    /// the same URI are merged into one entry.
    #[must_use]
    pub fn collect(&self) -> Vec<RouteInfo> {
        let app_prefix = self.prefix.as_deref().unwrap_or_default();
        let mut merged: Vec<RouteInfo> = Vec::new();

        for routes in &self.routes {
            let prefix = routes.prefix.as_deref().unwrap_or_default();
            for (uri, router) in &routes.handlers {
                let uri = join_uri(&[app_prefix, prefix, uri.as_str()]);
                let methods = describe::methods(router);
                match merged.iter_mut().find(|route| route.uri == uri) {
                    Some(route) => {
                        route.methods.extend(methods);
                        route.router = route.router.clone().merge(router.clone());
                    }
                    None => merged.push(RouteInfo {
                        uri,
                        methods,
                        router: router.clone(),
                    }),
                }
            }
        }
        merged
    }

    /// Build the router: routes first, then each enabled middleware wrapped
    /// around them, so the last layer in `middlewares` sees a request first.
    ///
    /// # Errors
    ///
    /// When a middleware cannot be built from its configuration.
    pub fn to_router(
        &self,
        ctx: AppContext,
        middlewares: Vec<Box<dyn MiddlewareLayer>>,
    ) -> Result<Router> {
        let mut router = Router::new();
        for route in self.collect() {
            tracing::debug!(route = %route, "mounting");
            router = router.route(&route.uri, route.router);
        }

        for layer in middlewares.iter().filter(|layer| layer.is_enabled()) {
            router = layer.apply(router)?;
            tracing::debug!(name = layer.name(), "middleware enabled");
        }

        Ok(router.with_state(ctx))
    }
}
