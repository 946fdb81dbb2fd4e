// demos/storefront_app/src/storage.rs

//! File-backed cart persistence.
//!
//! Stands in for the browser-profile key-value store: one JSON object per
//! file, mapping storage keys to raw string blobs. The cart library never
//! sees the file; it only sees the `StorageBackend` capability.

use crafthaven_cart::StorageBackend;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  fn read_map(&self) -> Result<HashMap<String, String>, anyhow::Error> {
    if !self.path.exists() {
      return Ok(HashMap::new());
    }
    let raw = fs::read_to_string(&self.path)?;
    if raw.trim().is_empty() {
      return Ok(HashMap::new());
    }
    Ok(serde_json::from_str(&raw)?)
  }

  fn write_map(&self, map: &HashMap<String, String>) -> Result<(), anyhow::Error> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }
    fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
    Ok(())
  }
}

impl StorageBackend for FileStorage {
  fn load(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
    Ok(self.read_map()?.get(key).cloned())
  }

  fn store(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
    let mut map = self.read_map()?;
    map.insert(key.to_string(), value.to_string());
    self.write_map(&map)
  }

  fn remove(&self, key: &str) -> Result<(), anyhow::Error> {
    let mut map = self.read_map()?;
    map.remove(key);
    self.write_map(&map)
  }
}
