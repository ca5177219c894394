//! Connection pool and schema.
//!
//! Tables are generated from the sea-orm entities at boot, so the service
//! ships no migration files.

use std::time::Duration;

use sea_orm::{
    sea_query::Table, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, Schema,
};

use crate::{app::Hooks, config, Result};

/// Open a pool sized and timed by `config`.
///
/// # Errors
///
/// When the URI is invalid or the database cannot be reached.
pub async fn connect(config: &config::Database) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.uri.as_str());
    options
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_millis(config.connect_timeout))
        .idle_timeout(Duration::from_millis(config.idle_timeout))
        .sqlx_logging(config.enable_logging);
    if let Some(millis) = config.acquire_timeout {
        options.acquire_timeout(Duration::from_millis(millis));
    }

    Database::connect(options).await
}

/// Apply the boot-time schema switches. `dangerously_recreate` replaces the
/// other two.
///
/// # Errors
///
/// When a statement fails.
pub async fn converge<H: Hooks>(db: &DatabaseConnection, config: &config::Database) -> Result<()> {
    if config.dangerously_recreate {
        tracing::warn!("dropping and recreating tables");
        return reset::<H>(db).await;
    }
    if config.auto_migrate {
        tracing::info!("creating missing tables");
        H::migrate(db).await?;
    }
    if config.dangerously_truncate {
        tracing::warn!("deleting every row");
        H::truncate(db).await?;
    }
    Ok(())
}

/// # Errors
///
/// When a statement fails.
pub async fn reset<H: Hooks>(db: &DatabaseConnection) -> Result<()> {
    H::drop_tables(db).await?;
    H::migrate(db).await
}

/// `CREATE TABLE IF NOT EXISTS` for `entity`, with columns taken from its
/// definition.
///
/// # Errors
///
/// When the statement fails.
pub async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let backend = db.get_database_backend();
    let statement = Schema::new(backend)
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// # Errors
///
/// When the statement fails.
pub async fn drop_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let statement = Table::drop()
        .table(entity.table_ref())
        .if_exists()
        .to_owned();
    db.execute(db.get_database_backend().build(&statement))
        .await?;
    Ok(())
}

/// Delete every row of `entity`'s table.
///
/// # Errors
///
/// When the delete fails.
pub async fn truncate_table<E: EntityTrait>(db: &DatabaseConnection, _entity: E) -> Result<()> {
    let deleted = E::delete_many().exec(db).await?;
    tracing::debug!(rows = deleted.rows_affected, "table emptied");
    Ok(())
}
