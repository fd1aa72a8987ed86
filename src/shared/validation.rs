use std::{borrow::Cow, collections::BTreeMap};

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[0-9\s\-\+\(\)]{10,}$").expect("phone pattern compiles")
});

pub fn error(code: &'static str, message: &'static str) -> ValidationError {
  ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn is_blank(value: &str) -> bool {
  value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
  EMAIL_REGEX.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
  PHONE_REGEX.is_match(value)
}

/// Flattens validation errors into one inline message per field.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
  errors
    .field_errors()
    .into_iter()
    .filter_map(|(field, field_errors)| {
      let message = field_errors.first().map(|error| {
        error
          .message
          .as_ref()
          .map(|message| message.to_string())
          .unwrap_or_else(|| error.code.to_string())
      })?;
      Some((field.to_string(), message))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_email_pattern() {
    assert!(is_email("a@b.com"));
    assert!(is_email("first.last@sub.example.org"));
    assert!(!is_email("a@b"));
    assert!(!is_email("a b@c.com"));
    assert!(!is_email("@b.com"));
    assert!(!is_email("a@@b.com"));
  }

  #[test]
  fn test_phone_pattern() {
    assert!(is_phone("+234 (801) 234-5678"));
    assert!(is_phone("0123456789"));
    assert!(!is_phone("012345678"));
    assert!(!is_phone("0123456789x"));
    assert!(!is_phone("١٢٣٤٥٦٧٨٩٠"));
  }

  #[test]
  fn test_field_errors_keeps_first_message() {
    let mut errors = ValidationErrors::new();
    errors.add("email", error("required", "Email is required"));
    errors.add("email", error("email", "Please enter a valid email"));
    errors.add("name", ValidationError::new("required"));

    let messages = field_errors(&errors);
    assert_eq!(messages["email"], "Email is required");
    assert_eq!(messages["name"], "required");
  }
}
