use serde::Serialize;

use crate::shared::model::user::UserRecord;

const EMPTY_FIELD: &str = "—";
const DEFAULT_HEADLINE: &str = "Member";

/// Read-only profile view. The password never leaves the store through here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRto {
  pub initials: String,
  pub name: String,
  pub headline: String,
  pub email: String,
  pub role: String,
  pub phone: String,
}

impl From<&UserRecord> for ProfileRto {
  fn from(user: &UserRecord) -> Self {
    let initials = user
      .name
      .split_whitespace()
      .filter_map(|part| part.chars().next())
      .collect();
    Self {
      initials,
      name: user.name.clone(),
      headline: or_placeholder(&user.role, DEFAULT_HEADLINE),
      email: user.email.clone(),
      role: or_placeholder(&user.role, EMPTY_FIELD),
      phone: or_placeholder(&user.phone, EMPTY_FIELD),
    }
  }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
  if value.is_empty() {
    placeholder.to_string()
  } else {
    value.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_profile_placeholders() {
    let rto = ProfileRto::from(&UserRecord {
      name: String::from("Ada  King Lovelace"),
      email: String::from("ada@example.com"),
      password: String::from("secret1"),
      role: String::new(),
      phone: String::new(),
    });

    assert_eq!(rto.initials, "AKL");
    assert_eq!(rto.headline, "Member");
    assert_eq!(rto.role, "—");
    assert_eq!(rto.phone, "—");
    let json = serde_json::to_string(&rto).unwrap();
    assert!(!json.contains("secret1"));
  }
}
