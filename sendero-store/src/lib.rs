pub mod app_config;
pub mod json_repo;
pub mod agent_client;

pub use json_repo::JsonFileReservationRepository;
pub use agent_client::HttpAgentClient;
