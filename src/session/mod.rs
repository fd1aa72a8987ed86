pub mod hydration_worker;


use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::shared::{
  model::{
    session::{SessionSnapshot, SessionWrapper},
    user::{UserPatch, UserRecord},
  },
  repository::{
    session_repository::{SessionRepository, SessionRepositoryImpl},
    user_repository::{UserRepository, UserRepositoryImpl},
  },
  storage::{KeyValueStore, StorageError},
};
use hydration_worker::HydrationSignal;

#[derive(Debug, Error)]
pub enum SessionError {
  #[error("Persistence error: {0}")]
  Persistence(#[from] StorageError),

  #[error("Session state has not been restored yet")]
  NotHydrated,

  #[error("Could not start hydration worker: {0}")]
  Spawn(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
  Authenticated,
  InvalidCredentials,
  NotRegistered,
}

impl LoginOutcome {
  pub fn is_authenticated(self) -> bool {
    self == LoginOutcome::Authenticated
  }
}

impl From<LoginOutcome> for bool {
  fn from(outcome: LoginOutcome) -> Self {
    outcome.is_authenticated()
  }
}

/// Single source of truth for who is logged in and what their profile is.
///
/// Starts unhydrated and restores the persisted session wrapper on a
/// background worker. Every mutation holds the state lock across its storage
/// writes, so the session user always mirrors the last record written.
pub struct SessionStore {
  users: Box<dyn UserRepository>,
  sessions: Box<dyn SessionRepository>,
  state: Mutex<SessionSnapshot>,
  subscribers: Mutex<Vec<flume::Sender<SessionSnapshot>>>,
  hydration: HydrationSignal,
}

impl SessionStore {
  pub fn open(
    storage: Arc<dyn KeyValueStore>,
  ) -> Result<Arc<Self>, SessionError> {
    Self::with_repositories(
      Box::new(UserRepositoryImpl::new(storage.clone())),
      Box::new(SessionRepositoryImpl::new(storage)),
    )
  }

  pub fn with_repositories(
    users: Box<dyn UserRepository>,
    sessions: Box<dyn SessionRepository>,
  ) -> Result<Arc<Self>, SessionError> {
    let (done, hydration) = HydrationSignal::new();
    let store = Arc::new(Self {
      users,
      sessions,
      state: Mutex::new(SessionSnapshot::default()),
      subscribers: Mutex::new(Vec::new()),
      hydration,
    });
    hydration_worker::spawn(store.clone(), done)
      .map_err(SessionError::Spawn)?;
    Ok(store)
  }

  pub fn user(&self) -> Option<UserRecord> {
    self.state.lock().user.clone()
  }

  pub fn is_authenticated(&self) -> bool {
    self.state.lock().is_authenticated
  }

  pub fn is_hydrated(&self) -> bool {
    self.state.lock().hydrated
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    self.state.lock().clone()
  }

  pub async fn wait_hydrated(&self) {
    if self.is_hydrated() {
      return;
    }
    self.hydration.wait().await;
  }

  /// The receiver gets the current snapshot right away, then one snapshot
  /// per state change.
  pub fn subscribe(&self) -> flume::Receiver<SessionSnapshot> {
    let state = self.state.lock();
    let (tx, rx) = flume::unbounded();
    let _ = tx.send(state.clone());
    self.subscribers.lock().push(tx);
    rx
  }

  /// Stores `user` as the registered account, replacing any previous one.
  /// The session itself is left alone; a login must follow.
  pub fn signup(&self, user: UserRecord) -> Result<(), SessionError> {
    let _state = self.state.lock();
    self.users.save(&user)?;
    info!(email = %user.email, "registered user");
    Ok(())
  }

  pub fn login(
    &self,
    email: &str,
    password: &str,
  ) -> Result<LoginOutcome, SessionError> {
    let mut state = self.state.lock();
    if !state.hydrated {
      return Err(SessionError::NotHydrated);
    }

    let Some(registered) = self.users.find_registered()? else {
      info!("login rejected, no registered user");
      return Ok(LoginOutcome::NotRegistered);
    };
    if registered.email != email || registered.password != password {
      info!("login rejected, invalid credentials");
      return Ok(LoginOutcome::InvalidCredentials);
    }

    let next = SessionSnapshot {
      user: Some(registered),
      is_authenticated: true,
      hydrated: true,
    };
    self.sessions.save(&SessionWrapper::from(&next))?;
    *state = next;
    self.notify(&state);
    info!(email, "logged in");
    Ok(LoginOutcome::Authenticated)
  }

  /// Clears the session even when the wrapper cannot be saved; the error is
  /// still returned so the caller can report it.
  pub fn logout(&self) -> Result<(), SessionError> {
    let mut state = self.state.lock();
    if !state.hydrated {
      return Err(SessionError::NotHydrated);
    }

    let was_authenticated = state.is_authenticated || state.user.is_some();
    state.user = None;
    state.is_authenticated = false;
    if was_authenticated {
      self.notify(&state);
      info!("logged out");
    }
    self.sessions.save(&SessionWrapper::from(&*state))?;
    Ok(())
  }

  /// Merges `patch` into the session user and re-persists the full record.
  /// Without a session user this does nothing.
  pub fn update_profile(&self, patch: UserPatch) -> Result<(), SessionError> {
    let mut state = self.state.lock();
    if !state.hydrated {
      return Err(SessionError::NotHydrated);
    }

    let current = match (&state.user, state.is_authenticated) {
      (Some(user), true) => user,
      _ => {
        debug!("profile update ignored, no session user");
        return Ok(());
      }
    };

    let merged = current.merged(patch);
    self.users.save(&merged)?;
    state.user = Some(merged);
    self.notify(&state);
    self.sessions.save(&SessionWrapper::from(&*state))?;
    info!("profile updated");
    Ok(())
  }

  /// Restores the persisted wrapper and marks the store hydrated, both under
  /// one lock so no observer sees an authenticated, unhydrated state.
  fn hydrate(&self) {
    let restored = match self.sessions.load() {
      Ok(Some(wrapper)) => wrapper,
      Ok(None) => SessionWrapper::default(),
      Err(error) => {
        warn!(%error, "could not restore session, starting signed out");
        SessionWrapper::default()
      }
    };

    let mut state = self.state.lock();
    if state.hydrated {
      return;
    }
    *state = match restored {
      SessionWrapper {
        user: Some(user),
        is_authenticated: true,
      } => SessionSnapshot {
        user: Some(user),
        is_authenticated: true,
        hydrated: true,
      },
      _ => SessionSnapshot {
        user: None,
        is_authenticated: false,
        hydrated: true,
      },
    };
    self.notify(&state);
    info!(is_authenticated = state.is_authenticated, "session hydrated");
  }

  fn notify(&self, snapshot: &SessionSnapshot) {
    self
      .subscribers
      .lock()
      .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
  }
}
