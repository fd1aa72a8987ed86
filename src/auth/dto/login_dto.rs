use serde::Deserialize;
use validator_derive::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::shared::validation::field_errors;
  use validator::Validate;

  #[test]
  fn test_login_requires_both_fields() {
    let dto = LoginDto {
      email: String::new(),
      password: String::new(),
    };
    let messages = field_errors(&dto.validate().unwrap_err());

    assert_eq!(messages["email"], "Email is required");
    assert_eq!(messages["password"], "Password is required");
  }
}
