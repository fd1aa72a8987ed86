use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
  Weak,
  Medium,
  Strong,
}

impl fmt::Display for StrengthLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      StrengthLabel::Weak => "Weak",
      StrengthLabel::Medium => "Medium",
      StrengthLabel::Strong => "Strong",
    };
    f.write_str(label)
  }
}

/// Signup meter: 25 points each for length, an uppercase letter, a digit and
/// a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
  pub fn of(password: &str) -> Self {
    if password.is_empty() {
      return Self(0);
    }
    let checks = [
      password.encode_utf16().count() >= 6,
      password.chars().any(|c| c.is_ascii_uppercase()),
      password.chars().any(|c| c.is_ascii_digit()),
      password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    Self(checks.iter().filter(|passed| **passed).count() as u8 * 25)
  }

  pub fn score(self) -> u8 {
    self.0
  }

  pub fn label(self) -> StrengthLabel {
    match self.0 {
      0..=49 => StrengthLabel::Weak,
      50..=74 => StrengthLabel::Medium,
      _ => StrengthLabel::Strong,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strength_scores() {
    assert_eq!(PasswordStrength::of("").score(), 0);
    assert_eq!(PasswordStrength::of("abc").score(), 0);
    assert_eq!(PasswordStrength::of("abcdef").score(), 25);
    assert_eq!(PasswordStrength::of("Abcdef").score(), 50);
    assert_eq!(PasswordStrength::of("Abcde1").score(), 75);
    assert_eq!(PasswordStrength::of("Abcd1!").score(), 100);
    assert_eq!(PasswordStrength::of("😀😀😀").score(), 50);
  }

  #[test]
  fn test_strength_labels() {
    assert_eq!(PasswordStrength::of("abcdef").label(), StrengthLabel::Weak);
    assert_eq!(PasswordStrength::of("Abcdef").label(), StrengthLabel::Medium);
    assert_eq!(PasswordStrength::of("Abcde1").label(), StrengthLabel::Strong);
    assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
  }
}
