//! `/_ping` answers as long as the process runs; `/_health` also asks the
//! database.

use axum::{extract::State, response::Response, routing::get};
use serde::Serialize;

use super::{format, routes::Routes};
use crate::{app::AppContext, Result};

#[derive(Serialize)]
struct Status {
    ok: bool,
}

async fn ping() -> Result<Response> {
    format::json(Status { ok: true })
}

async fn health(State(ctx): State<AppContext>) -> Result<Response> {
    let ok = match ctx.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error.msg = %err, "database ping failed");
            false
        }
    };
    format::json(Status { ok })
}

pub fn routes() -> Routes {
    Routes::new()
        .add("/_ping", get(ping))
        .add("/_health", get(health))
}
