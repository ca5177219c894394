pub use axum::{
    debug_handler,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
pub use sea_orm::entity::prelude::*;
pub use sea_orm::{ActiveValue, IntoActiveModel, Set};
pub use validator::Validate;

pub use crate::{
    app::{AppContext, Hooks},
    controller::{format, AppRoutes, Json, Routes},
    errors::Error,
    model::{ModelError, ModelResult},
    validation::Validatable,
    Result,
};
