//! # Application Error Handling
//!
//! [`Error`] is what every fallible function of the service returns. Handlers
//! turn it into an HTTP response through its `IntoResponse` implementation in
//! [`crate::controller`].

use std::path::PathBuf;

use axum::extract::rejection::JsonRejection;

use crate::model::ModelError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Neither `{env}.local.yaml` nor `{env}.yaml` exists in the config folder.
    #[error("no configuration file for environment `{0}`")]
    ConfigNotFound(String),

    #[error("cannot parse configuration `{}`: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Tera(#[from] tera::Error),

    #[error(transparent)]
    JSON(#[from] serde_json::Error),

    /// The request body is not the JSON a handler expects.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    DB(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("cannot install logger: {0}")]
    Logger(Box<dyn std::error::Error + Send + Sync>),
}
