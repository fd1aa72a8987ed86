use serde::{Deserialize, Serialize};

/// The single registered account. Stored as-is, password included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  pub name: String,
  pub email: String,
  pub password: String,
  #[serde(default)]
  pub role: String,
  #[serde(default)]
  pub phone: String,
}

/// A partial user record. Present fields overwrite, absent ones are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
}

impl UserRecord {
  pub fn merged(&self, patch: UserPatch) -> Self {
    Self {
      name: patch.name.unwrap_or_else(|| self.name.clone()),
      email: patch.email.unwrap_or_else(|| self.email.clone()),
      password: patch.password.unwrap_or_else(|| self.password.clone()),
      role: patch.role.unwrap_or_else(|| self.role.clone()),
      phone: patch.phone.unwrap_or_else(|| self.phone.clone()),
    }
  }
}
