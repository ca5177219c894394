//! Errors raised by the notes model, kept apart from [`crate::Error`] so the
//! model does not depend on anything HTTP.

use crate::validation::ModelValidationErrors;

#[derive(thiserror::Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ModelError {
    /// No row has the requested id.
    #[error("note not found")]
    EntityNotFound,

    #[error(transparent)]
    Validation(#[from] ModelValidationErrors),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

#[allow(clippy::module_name_repetitions)]
pub type ModelResult<T, E = ModelError> = std::result::Result<T, E>;
