pub mod dto;
pub mod password_strength;

use thiserror::Error;
use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::session::{LoginOutcome, SessionError, SessionStore};
use dto::{login_dto::LoginDto, signup_dto::SignupDto};

#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid form: {0}")]
  Invalid(#[from] ValidationErrors),

  #[error(transparent)]
  Session(#[from] SessionError),
}

/// Validates the signup form and registers the account. No session is
/// opened; the caller sends the user to the login page afterwards.
pub fn signup(store: &SessionStore, dto: SignupDto) -> Result<(), AuthError> {
  dto.validate()?;
  store.signup(dto.into_user()).map_err(|error| {
    warn!(%error, "signup could not be saved");
    AuthError::from(error)
  })
}

pub fn login(
  store: &SessionStore,
  dto: LoginDto,
) -> Result<LoginOutcome, AuthError> {
  dto.validate()?;
  Ok(store.login(&dto.email, &dto.password)?)
}

pub fn logout(store: &SessionStore) -> Result<(), AuthError> {
  Ok(store.logout()?)
}
