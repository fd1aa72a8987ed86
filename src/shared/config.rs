use std::{env, path::PathBuf};

pub const DEFAULT_STORAGE_PATH: &str = ".dashboard/storage.json";
pub const DEFAULT_API_URL: &str = "https://dummyjson.com";
pub const DEFAULT_API_USERS_LIMIT: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug)]
pub struct Config {
  pub storage_path: PathBuf,
  pub api_url: String,
  pub api_users_limit: u32,
  pub log_level: String,
}

impl Config {
  pub fn from_env() -> Self {
    let storage_path = env::var("DASHBOARD_STORAGE_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));
    let api_url = env::var("DASHBOARD_API_URL")
      .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let api_users_limit = env::var("DASHBOARD_API_USERS_LIMIT")
      .ok()
      .and_then(|limit| limit.parse().ok())
      .unwrap_or(DEFAULT_API_USERS_LIMIT);
    let log_level = env::var("DASHBOARD_LOG")
      .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    Self {
      storage_path,
      api_url,
      api_users_limit,
      log_level,
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
      api_url: DEFAULT_API_URL.to_string(),
      api_users_limit: DEFAULT_API_USERS_LIMIT,
      log_level: DEFAULT_LOG_LEVEL.to_string(),
    }
  }
}
