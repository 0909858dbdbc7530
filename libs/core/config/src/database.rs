use crate::{env_parse_or, ConfigError, FromEnv};
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database configuration.
///
/// `url` is optional: without `DATABASE_URL` the API falls back to the
/// in-memory user store.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl FromEnv for DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());

        Ok(Self {
            url,
            max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }
}
