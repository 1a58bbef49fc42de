//! Engine configuration from environment variables.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    firestore::{FirestoreClient, FirestoreConfig},
    memory::InMemoryDocumentStore,
    ports::{DocumentStore, StoreError},
    sqlite::SqliteDocumentStore,
};

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_SQLITE_PATH: &str = "pantry.db";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown store backend '{0}' (expected memory, sqlite or firestore)")]
    UnknownBackend(String),
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

/// Which document store the engine talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite { path: String },
    Firestore(FirestoreConfig),
}

impl StoreBackend {
    /// Connect to the configured store.
    pub async fn open(&self) -> Result<Arc<dyn DocumentStore>, StoreError> {
        match self {
            Self::Memory => Ok(Arc::new(InMemoryDocumentStore::new())),
            Self::Sqlite { path } => {
                let store = SqliteDocumentStore::new(path, Arc::new(SystemClock)).await?;
                Ok(Arc::new(store))
            }
            Self::Firestore(config) => Ok(Arc::new(FirestoreClient::new(config.clone()))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite { .. } => "sqlite",
            Self::Firestore(_) => "firestore",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub store: StoreBackend,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `PANTRY_STORE` | `memory` |
    /// | `PANTRY_SQLITE_PATH` | `pantry.db` |
    /// | `FIRESTORE_PROJECT_ID` | required for `firestore` |
    /// | `FIRESTORE_DATABASE` | `(default)` |
    /// | `FIRESTORE_API_KEY` | none |
    /// | `FIRESTORE_BASE_URL` | `https://firestore.googleapis.com` |
    /// | `SERVER_HOST` / `SERVER_PORT` (or `PORT`) | `0.0.0.0` / `3000` |
    /// | `CORS_ALLOWED_ORIGINS` | none |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend = var("PANTRY_STORE").unwrap_or_else(|| "memory".into());
        let store = match backend.to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "sqlite" => StoreBackend::Sqlite {
                path: var("PANTRY_SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.into()),
            },
            "firestore" => {
                let project_id =
                    var("FIRESTORE_PROJECT_ID").ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?;
                let mut config = FirestoreConfig::new(project_id);
                if let Some(database) = var("FIRESTORE_DATABASE") {
                    config.database = database;
                }
                if let Some(base_url) = var("FIRESTORE_BASE_URL") {
                    config.base_url = base_url;
                }
                config.api_key = var("FIRESTORE_API_KEY");
                StoreBackend::Firestore(config)
            }
            _ => return Err(ConfigError::UnknownBackend(backend)),
        };

        let server_port = var("SERVER_PORT")
            .or_else(|| var("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        Ok(Self {
            store,
            server_host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_to_memory_store() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cors_allowed_origins, None);
    }

    #[test]
    fn sqlite_uses_path() {
        let config = config_from(&[
            ("PANTRY_STORE", "SQLite"),
            ("PANTRY_SQLITE_PATH", "/var/lib/pantry.db"),
        ])
        .unwrap();
        assert_eq!(
            config.store,
            StoreBackend::Sqlite {
                path: "/var/lib/pantry.db".into()
            }
        );
    }

    #[test]
    fn firestore_requires_project() {
        let err = config_from(&[("PANTRY_STORE", "firestore")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("FIRESTORE_PROJECT_ID"));
    }

    #[test]
    fn firestore_reads_optional_settings() {
        let config = config_from(&[
            ("PANTRY_STORE", "firestore"),
            ("FIRESTORE_PROJECT_ID", "inventory-management"),
            ("FIRESTORE_API_KEY", "abc"),
            ("FIRESTORE_BASE_URL", "http://localhost:8080"),
        ])
        .unwrap();
        let StoreBackend::Firestore(fs) = config.store else {
            panic!("expected firestore backend");
        };
        assert_eq!(fs.project_id, "inventory-management");
        assert_eq!(fs.database, "(default)");
        assert_eq!(fs.api_key.as_deref(), Some("abc"));
        assert_eq!(fs.base_url, "http://localhost:8080");
    }

    #[test]
    fn unknown_backend_rejected() {
        let err = config_from(&[("PANTRY_STORE", "redis")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownBackend("redis".into()));
    }

    #[test]
    fn port_falls_back_when_unparsable() {
        let config = config_from(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.server_port, 8081);
        let config = config_from(&[("SERVER_PORT", "abc")]).unwrap();
        assert_eq!(config.server_port, 3000);
    }

    #[tokio::test]
    async fn memory_backend_opens() {
        let store = StoreBackend::Memory.open().await.unwrap();
        assert!(store.list_all("inventory").await.unwrap().is_empty());
    }
}
