//! From a loaded [`Config`] to a listening server.
//!
//! [`create_context`] connects to the database, [`create_app`] additionally
//! converges the schema and builds the router, and [`start`] serves it until
//! Ctrl-C or SIGTERM.

use axum::Router;

use crate::{
    app::{AppContext, Hooks},
    banner,
    config::Config,
    controller::RouteInfo,
    db,
    environment::Environment,
    settings::Settings,
    Result,
};

/// A context together with the router serving it.
pub struct BootResult {
    pub app_context: AppContext,
    pub router: Router,
}

/// Where `start` listens. Defaults to `server.binding` and `server.port`.
#[derive(Debug, Clone)]
pub struct ServeParams {
    pub binding: String,
    pub port: u16,
}

impl ServeParams {
    /// Command line values, falling back to the configured ones.
    #[must_use]
    pub fn resolve(config: &Config, binding: Option<String>, port: Option<u16>) -> Self {
        Self {
            binding: binding.unwrap_or_else(|| config.server.binding.clone()),
            port: port.unwrap_or(config.server.port),
        }
    }
}

/// Schema commands of `notes-api db`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunDbCommand {
    Migrate,
    Reset,
    Truncate,
}

/// Serve `boot` until a shutdown signal, then close the pool.
///
/// # Errors
///
/// When the address cannot be bound or the server stops with an error.
pub async fn start(boot: BootResult, params: ServeParams, no_banner: bool) -> Result<()> {
    if !no_banner {
        banner::print_banner(&boot.app_context, &params);
    }

    let listener = tokio::net::TcpListener::bind((params.binding.as_str(), params.port)).await?;
    tracing::info!(binding = %params.binding, port = params.port, "listening");

    axum::serve(listener, boot.router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    boot.app_context.db.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// # Errors
///
/// When the schema statements fail.
pub async fn run_db<H: Hooks>(ctx: &AppContext, cmd: RunDbCommand) -> Result<()> {
    tracing::warn!(command = ?cmd, "running database command");
    match cmd {
        RunDbCommand::Migrate => H::migrate(&ctx.db).await,
        RunDbCommand::Reset => db::reset::<H>(&ctx.db).await,
        RunDbCommand::Truncate => H::truncate(&ctx.db).await,
    }
}

/// Connect to the database and read the settings; the schema is left alone.
///
/// # Errors
///
/// When the settings are invalid or the database is unreachable.
pub async fn create_context(environment: &Environment, config: Config) -> Result<AppContext> {
    if config.logger.pretty_backtrace {
        std::env::set_var("RUST_BACKTRACE", "1");
        tracing::warn!("pretty backtraces are on; turn off `logger.pretty_backtrace` in production");
    }

    let settings = Settings::from_config(config.settings.as_ref())?;
    let db = db::connect(&config.database).await?;

    Ok(AppContext {
        environment: environment.clone(),
        db,
        config,
        settings,
    })
}

/// [`create_context`], then the schema switches, then the router.
///
/// # Errors
///
/// When any of the steps fails.
pub async fn create_app<H: Hooks>(environment: &Environment, config: Config) -> Result<BootResult> {
    let app_context = create_context(environment, config).await?;
    db::converge::<H>(&app_context.db, &app_context.config.database).await?;

    let router = H::routes(&app_context).to_router(app_context.clone(), H::middlewares(&app_context))?;
    Ok(BootResult {
        app_context,
        router,
    })
}

/// Every mounted endpoint, sorted by path.
#[must_use]
pub fn list_endpoints<H: Hooks>(ctx: &AppContext) -> Vec<RouteInfo> {
    let mut routes = H::routes(ctx).collect();
    routes.sort_by(|a, b| a.uri.cmp(&b.uri));
    routes
}
