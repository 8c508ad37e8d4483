//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, QuizCatalog, RedFlagCatalog};

/// Content source. Both documents are read whole, once, at startup.
#[async_trait::async_trait]
pub trait ContentPort: Send + Sync {
    /// Load the quiz document (`{ "quizzes": [...] }`).
    async fn load_quizzes(&self) -> Result<QuizCatalog, DomainError>;

    /// Load the polls + "my flags" document
    /// (`{ "polls": [...], "myRedFlags": [...], "myGreenFlags": [...] }`).
    async fn load_red_flags(&self) -> Result<RedFlagCatalog, DomainError>;
}
