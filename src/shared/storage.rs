use std::{collections::HashMap, fs, io::Write, path::PathBuf};

#[cfg(test)]
use mockall::automock;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("Storage I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Storage unavailable: {0}")]
  Unavailable(String),
}

/// Durable string-keyed storage underneath the session store, the local
/// counterpart of a browser's `localStorage`.
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
  fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
  fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ### In-memory implementation ###

#[derive(Default)]
pub struct InMemoryStore {
  entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for InMemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
    self
      .entries
      .write()
      .insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StorageError> {
    self.entries.write().remove(key);
    Ok(())
  }
}

// ### File implementation ###

/// Keeps every entry in a single JSON object on disk. Each write rewrites
/// the whole document through a sibling temp file and a rename.
pub struct FileStore {
  path: PathBuf,
  entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
    let path = path.into();
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }

    let entries = if path.exists() {
      let raw = fs::read_to_string(&path)?;
      if raw.trim().is_empty() {
        HashMap::new()
      } else {
        serde_json::from_str(&raw)?
      }
    } else {
      HashMap::new()
    };
    debug!(path = %path.display(), keys = entries.len(), "opened file store");

    Ok(Self {
      path,
      entries: RwLock::new(entries),
    })
  }

  fn flush(
    &self,
    entries: &HashMap<String, String>,
  ) -> Result<(), StorageError> {
    let document = serde_json::to_string_pretty(entries)?;
    let tmp_path = self.path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(document.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp_path, &self.path)?;
    debug!(path = %self.path.display(), "flushed file store");
    Ok(())
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
    let mut entries = self.entries.write();
    let previous = entries.insert(key.to_string(), value.to_string());
    if let Err(error) = self.flush(&entries) {
      // Keep memory and disk in agreement when the write is rejected.
      match previous {
        Some(previous) => entries.insert(key.to_string(), previous),
        None => entries.remove(key),
      };
      return Err(error);
    }
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StorageError> {
    let mut entries = self.entries.write();
    if let Some(previous) = entries.remove(key) {
      if let Err(error) = self.flush(&entries) {
        entries.insert(key.to_string(), previous);
        return Err(error);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_in_memory_set_get_remove() {
    let store = InMemoryStore::new();
    assert!(store.get("registeredUser").unwrap().is_none());

    store.set("registeredUser", "{}").unwrap();
    assert_eq!(store.get("registeredUser").unwrap().as_deref(), Some("{}"));

    store.set("registeredUser", "[]").unwrap();
    assert_eq!(store.get("registeredUser").unwrap().as_deref(), Some("[]"));

    store.remove("registeredUser").unwrap();
    assert!(store.get("registeredUser").unwrap().is_none());
  }

  #[test]
  fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    let store = FileStore::open(&path).unwrap();
    store.set("auth-storage", r#"{"user":null}"#).unwrap();
    store.set("other", "1").unwrap();
    store.remove("other").unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
      reopened.get("auth-storage").unwrap().as_deref(),
      Some(r#"{"user":null}"#)
    );
    assert!(reopened.get("other").unwrap().is_none());
  }

  #[test]
  fn test_file_store_rejects_corrupt_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "not json").unwrap();

    let result = FileStore::open(&path);
    assert!(matches!(result, Err(StorageError::Serialization(_))));
  }

  #[test]
  fn test_file_store_treats_empty_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, "").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert!(store.get("registeredUser").unwrap().is_none());
  }
}
