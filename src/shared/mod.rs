pub mod config;
pub mod model;
pub mod repository;
pub mod storage;
pub mod validation;
