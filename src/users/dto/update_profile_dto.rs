use serde::{Deserialize, Serialize};
use validator::ValidationError;
use validator_derive::Validate;

use crate::shared::{
  model::user::{UserPatch, UserRecord},
  validation::{error, is_blank, is_email, is_phone},
};

/// The editable part of the profile as held by the settings page.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate,
)]
pub struct UpdateProfileDto {
  #[validate(custom(function = validate_name))]
  pub name: String,
  #[validate(custom(function = validate_email))]
  pub email: String,
  #[validate(custom(function = validate_role))]
  pub role: String,
  #[validate(custom(function = validate_phone))]
  pub phone: String,
}

impl UpdateProfileDto {
  pub fn into_patch(self) -> UserPatch {
    UserPatch {
      name: Some(self.name),
      email: Some(self.email),
      password: None,
      role: Some(self.role),
      phone: Some(self.phone),
    }
  }
}

impl From<&UserRecord> for UpdateProfileDto {
  fn from(user: &UserRecord) -> Self {
    Self {
      name: user.name.clone(),
      email: user.email.clone(),
      role: user.role.clone(),
      phone: user.phone.clone(),
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
    return Err(error("email", "Please enter a valid email"));
  }
  Ok(())
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
  if is_blank(role) {
    return Err(error("required", "Position is required"));
  }
  Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
  if !is_blank(phone) && !is_phone(phone) {
    return Err(error("phone", "Please enter a valid phone number"));
  }
  Ok(())
}
