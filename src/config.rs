// Runtime configuration read from the environment (after `.env` is loaded)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::errors::StorageError;
use crate::domain::repositories::KeyValueStore;
use crate::infrastructure::stores::{
    FileKeyValueStore, InMemoryKeyValueStore, PostgresKeyValueStore,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value `{value}`: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Where group and player collections are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
    Postgres { url: String, max_connections: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
}

impl AppConfig {
    /// Reads `BIND_ADDR`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and `ROSTER_DATA_FILE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: raw_addr.clone(),
            reason: e.to_string(),
        })?;

        let storage = if let Some(url) = var("DATABASE_URL") {
            let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
                Some(raw) => raw.parse::<u32>().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
                None => DEFAULT_MAX_CONNECTIONS,
            };
            StorageBackend::Postgres {
                url,
                max_connections,
            }
        } else if let Some(path) = var("ROSTER_DATA_FILE") {
            StorageBackend::File(PathBuf::from(path))
        } else {
            StorageBackend::Memory
        };

        Ok(Self { bind_addr, storage })
    }

    /// Builds the configured store
    pub async fn build_store(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        let store: Arc<dyn KeyValueStore> = match &self.storage {
            StorageBackend::Memory => {
                tracing::warn!("no DATABASE_URL or ROSTER_DATA_FILE set, data will not outlive the process");
                Arc::new(InMemoryKeyValueStore::new())
            }
            StorageBackend::File(path) => {
                tracing::info!(path = %path.display(), "using file storage");
                Arc::new(FileKeyValueStore::new(path.clone()))
            }
            StorageBackend::Postgres {
                url,
                max_connections,
            } => {
                tracing::info!("Connecting to database...");
                let store = PostgresKeyValueStore::connect(url, *max_connections).await?;
                tracing::info!("Database connected successfully");
                Arc::new(store)
            }
        };

        Ok(store)
    }
}
