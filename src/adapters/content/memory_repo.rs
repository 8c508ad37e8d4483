//! Implements ContentPort from documents held in memory.
//!
//! `bundled()` serves the content compiled into the binary, so the CLI works
//! without a data directory; tests build their own documents with `new()`.

use crate::domain::{DomainError, QuizCatalog, RedFlagCatalog};
use crate::ports::ContentPort;
use tracing::info;

const BUNDLED_QUIZZES: &str = include_str!("../../../data/quizzes.json");
const BUNDLED_REDFLAGS: &str = include_str!("../../../data/redflags.json");

pub struct InMemoryContent {
    quizzes: QuizCatalog,
    red_flags: RedFlagCatalog,
}

impl InMemoryContent {
    pub fn new(quizzes: QuizCatalog, red_flags: RedFlagCatalog) -> Self {
        Self { quizzes, red_flags }
    }

    /// Content shipped with the crate (`data/*.json`).
    pub fn bundled() -> Result<Self, DomainError> {
        let quizzes = serde_json::from_str(BUNDLED_QUIZZES)
            .map_err(|e| DomainError::Content(format!("bundled quizzes: {}", e)))?;
        let red_flags = serde_json::from_str(BUNDLED_REDFLAGS)
            .map_err(|e| DomainError::Content(format!("bundled red flags: {}", e)))?;
        Ok(Self::new(quizzes, red_flags))
    }
}

#[async_trait::async_trait]
impl ContentPort for InMemoryContent {
    async fn load_quizzes(&self) -> Result<QuizCatalog, DomainError> {
        info!(quizzes = self.quizzes.quizzes.len(), "[memory] quizzes served");
        Ok(self.quizzes.clone())
    }

    async fn load_red_flags(&self) -> Result<RedFlagCatalog, DomainError> {
        info!(polls = self.red_flags.polls.len(), "[memory] red flags served");
        Ok(self.red_flags.clone())
    }
}
