// src/storage/mod.rs

//! The persistence capability behind the cart.
//!
//! The cart never talks to a concrete storage mechanism; it asks a
//! [`StorageBackend`] for the raw blob at a key and writes the full blob
//! back. Whether that is a browser-profile store, a file on disk or a map in
//! memory is the caller's concern. Execution contexts without any persistence
//! simply construct the store without a backend (see
//! [`CartStore::detached`](crate::CartStore::detached)).

pub mod schema;

use parking_lot::RwLock;
use std::collections::HashMap;

/// A key-value blob store the cart can persist itself into.
///
/// Implementations are expected to be cheap to call: the cart performs a full
/// synchronous read-modify-write around every mutation. Errors are reported
/// as `anyhow::Error` and wrapped into
/// [`CartError::Storage`](crate::CartError::Storage) by the store.
pub trait StorageBackend: Send + Sync {
  /// Returns the raw value stored at `key`, or `None` if absent.
  fn load(&self, key: &str) -> Result<Option<String>, anyhow::Error>;

  /// Overwrites the value at `key`.
  fn store(&self, key: &str, value: &str) -> Result<(), anyhow::Error>;

  /// Deletes the value at `key`. Absent keys are not an error.
  fn remove(&self, key: &str) -> Result<(), anyhow::Error>;
}

/// In-memory backend, used by tests and non-persistent sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StorageBackend for MemoryStorage {
  fn load(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn store(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), anyhow::Error> {
    self.entries.write().remove(key);
    Ok(())
  }
}
