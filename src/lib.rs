pub mod auth;
pub mod dashboard;
pub mod navigation;
pub mod session;
pub mod shared;
pub mod users;
