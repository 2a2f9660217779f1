pub mod auth;
pub mod branches;
pub mod clients;
pub mod notices;
pub mod requests;
pub mod service_charges;
pub mod service_requests;
pub mod service_types;
pub mod sos;
pub mod staff;
pub mod teams;
pub mod upload;
