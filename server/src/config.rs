//! Configuration management for the server.

use std::env;

/// Default number of pooled PostgreSQL connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Where shipment records are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL through a connection pool
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process memory; records are lost on restart
    Memory,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Storage backend for shipment records
    pub store_backend: StoreBackend,
    /// Name reported by the health endpoint
    pub server_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let store_backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("postgres") => {
                let database_url = lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(value) => value
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(ConfigError::InvalidMaxConnections)?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            Some("memory") => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::InvalidStoreBackend(other.to_string())),
        };

        let server_name = lookup("SERVER_NAME").unwrap_or_else(|| "Shiptrack Server".to_string());

        Ok(Self {
            host,
            port,
            store_backend,
            server_name,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,

    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid DATABASE_MAX_CONNECTIONS value")]
    InvalidMaxConnections,

    #[error("Unknown STORE_BACKEND '{0}', expected 'postgres' or 'memory'")]
    InvalidStoreBackend(String),
}
