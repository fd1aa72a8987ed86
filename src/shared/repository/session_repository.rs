use std::sync::Arc;

use tracing::debug;

use crate::shared::{
  model::session::SessionWrapper,
  storage::{KeyValueStore, StorageError},
};

pub const SESSION_KEY: &str = "auth-storage";

pub trait SessionRepository: Send + Sync {
  fn load(&self) -> Result<Option<SessionWrapper>, StorageError>;
  fn save(&self, session: &SessionWrapper) -> Result<(), StorageError>;
}

pub struct SessionRepositoryImpl {
  storage: Arc<dyn KeyValueStore>,
}

impl SessionRepositoryImpl {
  pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
    Self { storage }
  }
}

impl SessionRepository for SessionRepositoryImpl {
  fn load(&self) -> Result<Option<SessionWrapper>, StorageError> {
    match self.storage.get(SESSION_KEY)? {
      Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
      None => Ok(None),
    }
  }

  fn save(&self, session: &SessionWrapper) -> Result<(), StorageError> {
    let raw = serde_json::to_string(session)?;
    self.storage.set(SESSION_KEY, &raw)?;
    debug!(
      key = SESSION_KEY,
      is_authenticated = session.is_authenticated,
      "saved session wrapper"
    );
    Ok(())
  }
}
