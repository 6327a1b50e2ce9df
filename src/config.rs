use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/billing_records";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub enrichment: EnrichmentStrategy,
}

/// How a pass attaches clients to records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentStrategy {
    /// Load records and the full client list together, join in memory.
    Snapshot,
    /// One concurrent lookup per distinct client id.
    #[default]
    Bulk,
    /// Cheap criteria first, then one cached lookup per surviving record.
    Incremental,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 20,
                acquire_timeout_secs: 10,
            },
            filter: FilterConfig {
                enrichment: EnrichmentStrategy::default(),
            },
        }
    }
}

impl AppConfig {
    /// Load from defaults, then `BILLING__*` variables, then `DATABASE_URL`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "database.acquire_timeout_secs",
                defaults.database.acquire_timeout_secs as i64,
            )?
            .set_default("filter.enrichment", "bulk")?
            .add_source(
                Environment::with_prefix("BILLING")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
