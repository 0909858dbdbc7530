//! Configuration for Users API

use core_config::{database::DatabaseConfig, server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = DatabaseConfig::from_env()?;

        Ok(Self {
            environment,
            server,
            database,
        })
    }
}
