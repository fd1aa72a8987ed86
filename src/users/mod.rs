pub mod dto;
pub mod rto;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;
use validator::{Validate, ValidationErrors};

use crate::{
  session::{SessionError, SessionStore},
  shared::{model::user::UserRecord, validation::field_errors},
};
use dto::update_profile_dto::UpdateProfileDto;
use rto::profile_rto::ProfileRto;

#[derive(Debug, Error)]
pub enum FormError {
  #[error("Please fix the highlighted fields")]
  Invalid(#[from] ValidationErrors),

  #[error("could not save changes")]
  Save(#[source] SessionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
  Name,
  Email,
  Role,
  Phone,
}

impl ProfileField {
  pub fn key(self) -> &'static str {
    match self {
      ProfileField::Name => "name",
      ProfileField::Email => "email",
      ProfileField::Role => "role",
      ProfileField::Phone => "phone",
    }
  }
}

/// Profile page view of the session user, if there is one.
pub fn profile(store: &SessionStore) -> Option<ProfileRto> {
  store.user().as_ref().map(ProfileRto::from)
}

/// Un-submitted edit state of the settings page. It only reaches the session
/// store on `submit`.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
  profile: UpdateProfileDto,
  errors: BTreeMap<String, String>,
  changed: bool,
}

impl SettingsForm {
  pub fn new(user: Option<&UserRecord>) -> Self {
    Self {
      profile: user.map(UpdateProfileDto::from).unwrap_or_default(),
      errors: BTreeMap::new(),
      changed: false,
    }
  }

  pub fn profile(&self) -> &UpdateProfileDto {
    &self.profile
  }

  pub fn errors(&self) -> &BTreeMap<String, String> {
    &self.errors
  }

  pub fn is_changed(&self) -> bool {
    self.changed
  }

  pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
    let value = value.into();
    match field {
      ProfileField::Name => self.profile.name = value,
      ProfileField::Email => self.profile.email = value,
      ProfileField::Role => self.profile.role = value,
      ProfileField::Phone => self.profile.phone = value,
    }
    self.changed = true;
    self.errors.remove(field.key());
  }

  pub fn reset(&mut self, user: &UserRecord) {
    self.profile = UpdateProfileDto::from(user);
    self.errors.clear();
    self.changed = false;
  }

  pub fn validate(&mut self) -> bool {
    match self.profile.validate() {
      Ok(()) => {
        self.errors.clear();
        true
      }
      Err(errors) => {
        self.errors = field_errors(&errors);
        false
      }
    }
  }

  pub fn submit(&mut self, store: &SessionStore) -> Result<(), FormError> {
    if let Err(errors) = self.profile.validate() {
      self.errors = field_errors(&errors);
      return Err(FormError::Invalid(errors));
    }
    self.errors.clear();

    store
      .update_profile(self.profile.clone().into_patch())
      .map_err(|error| {
        warn!(%error, "profile changes not saved");
        FormError::Save(error)
      })?;
    self.changed = false;
    Ok(())
  }
}
