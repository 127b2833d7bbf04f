//! Storage crate: the user registry and its whole-unit persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, Registry
//! - [`repository`] – RegistryStore trait
//! - [`json_store`] – JsonFileStore (flat JSON file)
//! - [`memory_store`] – InMemoryStore

mod error;
mod json_store;
mod memory_store;
mod models;
mod repository;

pub use error::StorageError;
pub use json_store::JsonFileStore;
pub use memory_store::InMemoryStore;
pub use models::{Registry, UserRecord};
pub use repository::RegistryStore;
