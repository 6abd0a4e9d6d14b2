pub mod app_config;
pub mod pending_repo;

pub use pending_repo::{build_repository, HttpPendingRepository, InMemoryPendingRepository, StoreError};
