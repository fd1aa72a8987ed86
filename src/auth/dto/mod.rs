pub mod login_dto;
pub mod signup_dto;
