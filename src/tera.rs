//! Configuration files are `tera` templates; rendering them gives access to
//! `get_env`.
use tera::{Context, Tera};

use crate::Result;

/// Render `template` once, without any variables in scope.
///
/// # Errors
///
/// When the template is malformed or reads an unset environment variable
/// that has no default.
pub fn render_string(template: &str) -> Result<String> {
    Ok(Tera::one_off(template, &Context::new(), false)?)
}
