use std::sync::OnceLock;

use axum::{http::Method, routing::MethodRouter};
use regex::Regex;

use crate::app::AppContext;

static BOUND_METHOD: OnceLock<Regex> = OnceLock::new();

/// HTTP methods a [`MethodRouter`] has a handler for.
///
/// axum keeps that private; its `Debug` output prints `get: BoxedHandler`
/// for every bound method, which is what gets matched here.
pub fn methods(router: &MethodRouter<AppContext>) -> Vec<Method> {
    let pattern = BOUND_METHOD
        .get_or_init(|| Regex::new(r"\b(\w+):\s*BoxedHandler\b").expect("static pattern"));

    let debug = format!("{router:?}");
    pattern
        .captures_iter(&debug)
        .filter_map(|caps| Method::from_bytes(caps[1].to_uppercase().as_bytes()).ok())
        .collect()
}
