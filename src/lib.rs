#![allow(clippy::module_name_repetitions)]
//! # notes-api
//!
//! A small note-taking HTTP API. Notes carry an optional title and a
//! required content; notes stored without a title are shown with a title
//! made of the first characters of their content.
//!
//! ```sh
//! notes-api start            # serve on the configured port
//! notes-api -e test routes   # list endpoints
//! notes-api db reset         # drop and recreate the tables
//! ```
//!
//! | Feature   | Default | Description                       |
//! |-----------|---------|-----------------------------------|
//! | `cli`     | yes     | The `notes-api` binary.           |
//! | `testing` | no      | [`testing`] helpers for requests. |

pub use self::errors::Error;

pub mod app;
mod banner;
pub mod boot;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod controller;
pub mod controllers;
pub mod db;
pub mod environment;
pub mod errors;
pub mod logger;
pub mod model;
pub mod models;
pub mod prelude;
pub mod settings;
mod tera;
#[cfg(feature = "testing")]
pub mod testing;
pub mod validation;
pub mod views;


pub type Result<T, E = Error> = std::result::Result<T, E>;
