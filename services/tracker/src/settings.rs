//! Service configuration loaded from the environment

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Which store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    /// Volatile; everything is lost on shutdown
    Memory,
}

/// Tracker service configuration
///
/// # Environment Variables
/// - `HOST`: bind address (default: `0.0.0.0`)
/// - `PORT`: listening port (default: `3000`)
/// - `STORAGE`: `postgres` or `memory` (default: `postgres`)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("storage", "postgres")?
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
