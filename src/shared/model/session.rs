use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// Persisted form of the session, restored once at hydration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionWrapper {
  pub user: Option<UserRecord>,
  #[serde(default)]
  pub is_authenticated: bool,
}

/// What subscribers of the session store observe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
  pub user: Option<UserRecord>,
  pub is_authenticated: bool,
  pub hydrated: bool,
}

impl From<&SessionSnapshot> for SessionWrapper {
  fn from(snapshot: &SessionSnapshot) -> Self {
    Self {
      user: snapshot.user.clone(),
      is_authenticated: snapshot.is_authenticated,
    }
  }
}
