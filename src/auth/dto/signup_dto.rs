use serde::Deserialize;
use validator::ValidationError;
use validator_derive::Validate;

use crate::shared::{
  model::user::UserRecord,
  validation::{error, is_blank, is_email},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupDto {
  #[validate(custom(function = validate_name))]
  pub name: String,
  #[validate(custom(function = validate_email))]
  pub email: String,
  #[validate(custom(function = validate_password))]
  pub password: String,
}

impl SignupDto {
  /// Role and phone start empty; they are filled in from the settings page.
  pub fn into_user(self) -> UserRecord {
    UserRecord {
      name: self.name,
      email: self.email,
      password: self.password,
      role: String::new(),
      phone: String::new(),
    }
  }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
  if is_blank(name) {
    return Err(error("required", "Name is required"));
  }
  Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
  if is_blank(email) {
    return Err(error("required", "Email is required"));
  }
  if !is_email(email) {
    return Err(error("email", "Please enter a valid email address"));
  }
  Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
  if password.is_empty() {
    return Err(error("required", "Password is required"));
  }
  // Counted in UTF-16 units, the way the browser form measured it.
  if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
    return Err(error("length", "Password must be at least 6 characters"));
  }
  Ok(())
}
