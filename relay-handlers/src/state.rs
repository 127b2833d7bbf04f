//! Owned relay state shared by the handlers: the in-memory registry and its backing store.

use std::sync::Arc;

use storage::{Registry, RegistryStore, StorageError};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};

/// Registry plus the store it is persisted to.
///
/// Handlers hold the lock for the whole of one message, so the registry read-modify-write and the
/// following save never interleave between updates.
pub struct RelayState {
    registry: Mutex<Registry>,
    store: Arc<dyn RegistryStore>,
}

impl RelayState {
    /// Reads the registry once from `store`. A load failure is logged and the bot starts with an empty registry.
    pub async fn load(store: Arc<dyn RegistryStore>) -> Self {
        let registry = match store.load().await {
            Ok(registry) => {
                info!(users = registry.len(), "Registry loaded");
                registry
            }
            Err(e) => {
                error!(error = %e, "Error reading user data, starting with an empty registry");
                Registry::new()
            }
        };
        Self::with_registry(registry, store)
    }

    pub fn with_registry(registry: Registry, store: Arc<dyn RegistryStore>) -> Self {
        Self {
            registry: Mutex::new(registry),
            store,
        }
    }

    /// Locks the registry for one message's worth of work.
    pub async fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().await
    }

    /// Writes the whole registry to the store. Callers decide whether a failure matters.
    pub async fn persist(&self, registry: &Registry) -> Result<(), StorageError> {
        self.store.save(registry).await
    }

    /// Copy of the current registry.
    pub async fn snapshot(&self) -> Registry {
        self.registry.lock().await.clone()
    }
}
