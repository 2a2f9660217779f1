pub mod auth;
pub mod request_service;
pub mod team_service;
pub mod upload_service;
