//! Flat JSON file store: the whole registry lives in one pretty-printed JSON object.
//!
//! External: the file system via tokio::fs. A missing file loads as an empty registry.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::Registry;
use crate::repository::RegistryStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RegistryStore for JsonFileStore {
    async fn load(&self) -> Result<Registry, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "User data file not found, starting with an empty registry");
                return Ok(Registry::new());
            }
            Err(e) => return Err(e.into()),
        };

        let registry: Registry = serde_json::from_str(&raw)?;
        info!(path = %self.path.display(), users = registry.len(), "User data loaded");
        Ok(registry)
    }

    async fn save(&self, registry: &Registry) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(registry)?;
        tokio::fs::write(&self.path, body).await?;
        debug!(path = %self.path.display(), users = registry.len(), "User data saved");
        Ok(())
    }
}
