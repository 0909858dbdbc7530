//! PostgreSQL connection and schema setup

use core_config::database::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// Connect to PostgreSQL and bring the schema up to date
pub async fn connect_and_migrate(
    url: &str,
    config: &DatabaseConfig,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    info!("Successfully connected to PostgreSQL database");

    Migrator::up(&db, None).await?;
    info!("Database migrations applied");

    Ok(db)
}
