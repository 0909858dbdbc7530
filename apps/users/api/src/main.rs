//! Users API - REST server

use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, PgUserRepository, TracingLogger, UserService};
use tracing::{info, warn};

mod api;
mod config;
mod database;
mod openapi;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let logger = TracingLogger::default();

    let app = match config.database.url.as_deref() {
        Some(url) => {
            info!("Connecting to PostgreSQL");
            let db = database::connect_and_migrate(url, &config.database).await?;
            api::routes(UserService::new(PgUserRepository::new(db), logger))
        }
        None => {
            warn!("DATABASE_URL not set, users are kept in memory only");
            api::routes(UserService::new(InMemoryUserRepository::new(), logger))
        }
    };

    info!("Starting Users API on port {}", config.server.port);

    server::serve(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
