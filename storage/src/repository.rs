use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Registry;

/// Whole-unit persistence for the [`Registry`]: read wholesale once, written wholesale after every mutation.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Loads the full registry. A store with nothing saved yet yields an empty registry.
    async fn load(&self) -> Result<Registry, StorageError>;
    /// Replaces the stored registry with `registry`.
    async fn save(&self, registry: &Registry) -> Result<(), StorageError>;
}
