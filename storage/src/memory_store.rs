//! In-process store, for tests and dry runs.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::models::Registry;
use crate::repository::RegistryStore;

/// Keeps the last saved registry in memory and counts saves.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<(Registry, usize)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose first load returns `registry`.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            state: Mutex::new((registry, 0)),
        }
    }

    /// The registry as of the last save (or the seed if never saved).
    pub async fn snapshot(&self) -> Registry {
        self.state.lock().await.0.clone()
    }

    /// Number of successful saves so far.
    pub async fn save_count(&self) -> usize {
        self.state.lock().await.1
    }
}

#[async_trait]
impl RegistryStore for InMemoryStore {
    async fn load(&self) -> Result<Registry, StorageError> {
        Ok(self.state.lock().await.0.clone())
    }

    async fn save(&self, registry: &Registry) -> Result<(), StorageError> {
        let mut state = self.state.lock().await;
        state.0 = registry.clone();
        state.1 += 1;
        Ok(())
    }
}
