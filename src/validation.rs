//! Validation of active models before they are written.
//!
//! A model opts in by describing itself as a `validator::Validate` value:
//!
//! ```rust,ignore
//! impl Validatable for notes::ActiveModel {
//!     fn validator(&self) -> Box<dyn Validate> {
//!         Box::new(NoteValidator { content: self.content.as_ref().clone() })
//!     }
//! }
//! ```
//!
//! Failures come back as [`ModelValidationErrors`], keyed by field name, and
//! are rendered into the `errors` member of a 400 response body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the rule, such as `length`.
    pub code: String,
    pub message: Option<String>,
    /// Rule arguments, such as `min`.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

impl From<&validator::ValidationError> for FieldError {
    fn from(err: &validator::ValidationError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.as_ref().map(ToString::to_string),
            params: err
                .params
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("invalid note: {}", summarize(.errors))]
pub struct ModelValidationErrors {
    pub errors: BTreeMap<String, Vec<FieldError>>,
}

impl ModelValidationErrors {
    /// `field: message` for every failure, comma separated. The rule code
    /// stands in for a missing message.
    #[must_use]
    pub fn summary(&self) -> String {
        summarize(&self.errors)
    }
}

fn summarize(errors: &BTreeMap<String, Vec<FieldError>>) -> String {
    let mut parts = Vec::new();
    for (field, failures) in errors {
        for failure in failures {
            let text = failure.message.as_deref().unwrap_or(&failure.code);
            parts.push(format!("{field}: {text}"));
        }
    }
    parts.join(", ")
}

impl From<ValidationErrors> for ModelValidationErrors {
    fn from(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, failures)| {
                (
                    field.to_string(),
                    failures.iter().map(FieldError::from).collect(),
                )
            })
            .collect();
        Self { errors }
    }
}

/// Gives an active model a `validate` step.
pub trait Validatable {
    /// The rules to check, filled with the model's current values.
    fn validator(&self) -> Box<dyn Validate>;

    /// # Errors
    ///
    /// Every rule that fails, grouped by field.
    fn validate(&self) -> Result<(), ModelValidationErrors> {
        Validate::validate(&*self.validator()).map_err(Into::into)
    }
}
