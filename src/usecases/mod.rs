//! Application use cases. Orchestrate domain logic via ports.

pub mod catalog_service;
pub mod flag_service;
pub mod poll_session;
pub mod quiz_session;

pub use catalog_service::CatalogService;
pub use flag_service::{FlagService, SharedFlags};
pub use poll_session::{PollSession, VoteReveal};
pub use quiz_session::{QuizSession, QuizStep};
