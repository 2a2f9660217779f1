pub mod user_repo;
pub use user_repo::UserRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod branch_repo;
pub use branch_repo::BranchRepository;
pub mod staff_repo;
pub use staff_repo::StaffRepository;
pub mod team_repo;
pub use team_repo::TeamRepository;
pub mod service_repo;
pub use service_repo::ServiceRepository;
pub mod service_request_repo;
pub use service_request_repo::ServiceRequestRepository;
pub mod request_repo;
pub use request_repo::RequestRepository;
pub mod notice_repo;
pub use notice_repo::NoticeRepository;
pub mod sos_repo;
pub use sos_repo::SosRepository;
