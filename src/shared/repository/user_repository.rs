use std::sync::Arc;

use tracing::debug;

use crate::shared::{
  model::user::UserRecord,
  storage::{KeyValueStore, StorageError},
};

pub const REGISTERED_USER_KEY: &str = "registeredUser";

pub trait UserRepository: Send + Sync {
  fn find_registered(&self) -> Result<Option<UserRecord>, StorageError>;
  fn save(&self, user: &UserRecord) -> Result<(), StorageError>;
}

pub struct UserRepositoryImpl {
  storage: Arc<dyn KeyValueStore>,
}

impl UserRepositoryImpl {
  pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
    Self { storage }
  }
}

impl UserRepository for UserRepositoryImpl {
  fn find_registered(&self) -> Result<Option<UserRecord>, StorageError> {
    match self.storage.get(REGISTERED_USER_KEY)? {
      Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
      None => Ok(None),
    }
  }

  fn save(&self, user: &UserRecord) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user)?;
    self.storage.set(REGISTERED_USER_KEY, &raw)?;
    debug!(key = REGISTERED_USER_KEY, "saved registered user");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::shared::storage::InMemoryStore;

  #[test]
  fn test_save_overwrites_previous_record() {
    let storage = Arc::new(InMemoryStore::new());
    let repository = UserRepositoryImpl::new(storage.clone());
    assert!(repository.find_registered().unwrap().is_none());

    let first = UserRecord {
      name: String::from("First"),
      email: String::from("first@example.com"),
      password: String::from("secret1"),
      role: String::new(),
      phone: String::new(),
    };
    let second = UserRecord {
      name: String::from("Second"),
      email: String::from("second@example.com"),
      ..first.clone()
    };

    repository.save(&first).unwrap();
    repository.save(&second).unwrap();

    assert_eq!(repository.find_registered().unwrap(), Some(second));
  }

  #[test]
  fn test_corrupt_record_is_a_serialization_error() {
    let storage = Arc::new(InMemoryStore::new());
    storage.set(REGISTERED_USER_KEY, "{oops").unwrap();

    let repository = UserRepositoryImpl::new(storage);
    assert!(matches!(
      repository.find_registered(),
      Err(StorageError::Serialization(_))
    ));
  }
}
