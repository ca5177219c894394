//! Process-wide `tracing` subscriber.
//!
//! The filter comes from, in order: `RUST_LOG`, `logger.override_filter`,
//! or `logger.level` applied to this crate and the HTTP and database crates
//! underneath it.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::{app::Hooks, config, Error, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = serde_variant::to_variant_name(self).map_err(|_| std::fmt::Error)?;
        f.write_str(name)
    }
}

/// Targets that log at the configured level besides the application itself.
const DEPENDENCY_TARGETS: [&str; 3] = ["tower_http", "sqlx::query", "sea_orm"];

fn directives(app_name: &str, level: LogLevel) -> String {
    std::iter::once(app_name)
        .chain(DEPENDENCY_TARGETS)
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber described by `config`. Does nothing when
/// `logger.enable` is off.
///
/// # Errors
///
/// When the filter does not parse or a subscriber is already installed.
pub fn init<H: Hooks>(config: &config::Logger) -> Result<()> {
    if !config.enable {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(
            config
                .override_filter
                .clone()
                .unwrap_or_else(|| directives(H::app_name(), config.level)),
        )
        .map_err(|err| Error::Logger(Box::new(err)))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format {
        Format::Compact => builder.compact().try_init(),
        Format::Pretty => builder.pretty().try_init(),
        Format::Json => builder.json().try_init(),
    };
    installed.map_err(Error::Logger)
}
