pub mod auth;
pub mod branch;
pub mod client;
pub mod notice;
pub mod request;
pub mod service;
pub mod service_request;
pub mod sos;
pub mod staff;
pub mod team;
