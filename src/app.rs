//! The notes service and the state its handlers share.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    controller::{
        middleware::{self, MiddlewareLayer},
        AppRoutes,
    },
    controllers, db,
    environment::Environment,
    models::_entities::prelude::Notes,
    settings::Settings,
    Result,
};

/// Router state, cloned into every handler.
#[derive(Clone)]
pub struct AppContext {
    pub environment: Environment,
    pub db: DatabaseConnection,
    pub config: Config,
    /// `config.settings`, already deserialized.
    pub settings: Settings,
}

/// What the boot sequence and the CLI need to know about an application.
#[async_trait]
pub trait Hooks: Send {
    /// Logging target of the application's own events.
    fn app_name() -> &'static str;

    #[must_use]
    fn app_version() -> String {
        "dev".to_string()
    }

    fn routes(ctx: &AppContext) -> AppRoutes;

    /// Layers wrapped around [`Hooks::routes`], innermost first.
    #[must_use]
    fn middlewares(ctx: &AppContext) -> Vec<Box<dyn MiddlewareLayer>> {
        middleware::default_middleware_stack(ctx)
    }

    /// Create missing tables.
    ///
    /// # Errors
    ///
    /// When a schema statement fails.
    async fn migrate(db: &DatabaseConnection) -> Result<()>;

    /// Drop the tables and their rows.
    ///
    /// # Errors
    ///
    /// When a schema statement fails.
    async fn drop_tables(db: &DatabaseConnection) -> Result<()>;

    /// Delete every row, keeping the tables.
    ///
    /// # Errors
    ///
    /// When the delete fails.
    async fn truncate(db: &DatabaseConnection) -> Result<()>;
}

pub struct App;

#[async_trait]
impl Hooks for App {
    fn app_name() -> &'static str {
        env!("CARGO_CRATE_NAME")
    }

    fn app_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn routes(_ctx: &AppContext) -> AppRoutes {
        AppRoutes::with_default_routes()
            .prefix("/api")
            .add_route(controllers::notes::routes())
    }

    async fn migrate(db: &DatabaseConnection) -> Result<()> {
        db::create_table(db, Notes).await
    }

    async fn drop_tables(db: &DatabaseConnection) -> Result<()> {
        db::drop_table(db, Notes).await
    }

    async fn truncate(db: &DatabaseConnection) -> Result<()> {
        db::truncate_table(db, Notes).await
    }
}
