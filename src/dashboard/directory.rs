use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DirectoryError {
  #[error("Request error: {0}")]
  Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
  pub id: u64,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub age: u32,
}

#[derive(Debug, Deserialize)]
struct UsersPage {
  #[serde(default)]
  users: Vec<ApiUser>,
}

/// Remote list of demo users shown next to the mock metrics.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
  async fn fetch_users(
    &self,
    limit: u32,
  ) -> Result<Vec<ApiUser>, DirectoryError>;
}

pub struct DummyJsonDirectory {
  client: reqwest::Client,
  base_url: String,
}

impl DummyJsonDirectory {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: base_url.into().trim_end_matches('/').to_string(),
    }
  }
}

#[async_trait]
impl UserDirectory for DummyJsonDirectory {
  async fn fetch_users(
    &self,
    limit: u32,
  ) -> Result<Vec<ApiUser>, DirectoryError> {
    let url = format!("{}/users", self.base_url);
    debug!(%url, limit, "fetching demo users");
    let page: UsersPage = self
      .client
      .get(&url)
      .query(&[("limit", limit)])
      .send()
      .await?
      .error_for_status()?
      .json()
      .await?;
    Ok(page.users)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_page_without_users_is_empty() {
    let page: UsersPage = serde_json::from_str(r#"{"total":0}"#).unwrap();
    assert!(page.users.is_empty());
  }

  #[test]
  fn test_parses_dummyjson_user() {
    let page: UsersPage = serde_json::from_str(
      r#"{
        "users": [{
          "id": 1,
          "firstName": "Emily",
          "lastName": "Johnson",
          "email": "emily.johnson@x.dummyjson.com",
          "age": 28,
          "gender": "female"
        }],
        "total": 208
      }"#,
    )
    .unwrap();
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].first_name, "Emily");
  }

  #[test]
  fn test_base_url_is_normalized() {
    let directory = DummyJsonDirectory::new("https://dummyjson.com/");
    assert_eq!(directory.base_url, "https://dummyjson.com");
  }
}
