#![allow(clippy::unused_async)]
use serde::Deserialize;

use crate::{
    models::notes::{Model, NoteParams},
    prelude::*,
    views::notes::{NoteResponse, Presentation},
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[debug_handler]
pub async fn add(State(ctx): State<AppContext>, Json(params): Json<NoteParams>) -> Result<Response> {
    let note = Model::create(&ctx.db, &params).await?;
    format::json(NoteResponse::new(&note, Presentation::Stored, &ctx.settings))
}

/// Lists every note, or only the matching ones when `?query=` is present.
#[debug_handler]
pub async fn list(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    let notes = match params.query {
        Some(query) => Model::search(&ctx.db, &query).await?,
        None => Model::list(&ctx.db).await?,
    };
    format::json(NoteResponse::list(
        &notes,
        Presentation::Listing,
        &ctx.settings,
    ))
}

#[debug_handler]
pub async fn get_one(Path(id): Path<Uuid>, State(ctx): State<AppContext>) -> Result<Response> {
    let note = Model::find_by_id(&ctx.db, id).await?;
    format::json(NoteResponse::new(&note, Presentation::Single, &ctx.settings))
}

#[debug_handler]
pub async fn update(
    Path(id): Path<Uuid>,
    State(ctx): State<AppContext>,
    Json(params): Json<NoteParams>,
) -> Result<Response> {
    Model::edit(&ctx.db, id, &params).await?;
    format::empty()
}

#[debug_handler]
pub async fn remove(Path(id): Path<Uuid>, State(ctx): State<AppContext>) -> Result<Response> {
    Model::remove(&ctx.db, id).await?;
    format::empty()
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("notes")
        .add("/", get(list))
        .add("/", post(add))
        .add("/{id}", get(get_one))
        .add("/{id}", put(update))
        .add("/{id}", delete(remove))
}
