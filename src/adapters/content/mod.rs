//! Content adapters. Implement ContentPort.

pub mod json_repo;
pub mod memory_repo;

pub use json_repo::JsonContentRepo;
pub use memory_repo::InMemoryContent;
