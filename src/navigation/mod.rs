use crate::shared::model::session::SessionSnapshot;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";
pub const SETTINGS_PATH: &str = "/settings";

pub const PUBLIC_PATHS: [&str; 2] = [LOGIN_PATH, SIGNUP_PATH];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  /// Session state is not known yet; render nothing auth-dependent.
  Wait,
  Render,
  Redirect(&'static str),
}

pub fn is_public(path: &str) -> bool {
  PUBLIC_PATHS.contains(&path)
}

pub fn guard(hydrated: bool, is_authenticated: bool, path: &str) -> Route {
  if !hydrated {
    return Route::Wait;
  }
  match (is_authenticated, is_public(path)) {
    (false, false) => Route::Redirect(LOGIN_PATH),
    (true, true) => Route::Redirect(DASHBOARD_PATH),
    _ => Route::Render,
  }
}

pub fn guard_snapshot(snapshot: &SessionSnapshot, path: &str) -> Route {
  guard(snapshot.hydrated, snapshot.is_authenticated, path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
  pub name: &'static str,
  pub href: &'static str,
}

pub static SIDEBAR: [SidebarItem; 3] = [
  SidebarItem {
    name: "Dashboard",
    href: DASHBOARD_PATH,
  },
  SidebarItem {
    name: "Profile",
    href: PROFILE_PATH,
  },
  SidebarItem {
    name: "Settings",
    href: SETTINGS_PATH,
  },
];

pub fn active_item(path: &str) -> Option<&'static SidebarItem> {
  SIDEBAR.iter().find(|item| item.href == path)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unhydrated_always_waits() {
    assert_eq!(guard(false, true, DASHBOARD_PATH), Route::Wait);
    assert_eq!(guard(false, false, LOGIN_PATH), Route::Wait);
  }

  #[test]
  fn test_redirects() {
    assert_eq!(
      guard(true, false, SETTINGS_PATH),
      Route::Redirect(LOGIN_PATH)
    );
    assert_eq!(
      guard(true, true, SIGNUP_PATH),
      Route::Redirect(DASHBOARD_PATH)
    );
    assert_eq!(guard(true, false, SIGNUP_PATH), Route::Render);
    assert_eq!(guard(true, true, PROFILE_PATH), Route::Render);
  }

  #[test]
  fn test_snapshot_guard_and_sidebar() {
    let snapshot = SessionSnapshot {
      user: None,
      is_authenticated: false,
      hydrated: true,
    };
    assert_eq!(
      guard_snapshot(&snapshot, DASHBOARD_PATH),
      Route::Redirect(LOGIN_PATH)
    );
    assert_eq!(
      active_item(PROFILE_PATH).map(|item| item.name),
      Some("Profile")
    );
    assert!(active_item(LOGIN_PATH).is_none());
  }
}
