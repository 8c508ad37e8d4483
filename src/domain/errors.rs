//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. None of them is fatal:
//! the UI renders each one as a state (not found, invalid link, ...).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Unknown quiz/poll identifier.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Share token could not be decoded (bad base64, bad layout, non-numeric id).
    #[error("Invalid share token: {0}")]
    InvalidToken(String),

    /// Token decoded fine but none of its ids exist in the current catalogs.
    #[error("Share link references no known flags")]
    ExpiredLink,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Content document missing or malformed.
    #[error("Content error: {0}")]
    Content(String),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    pub fn quiz_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Quiz",
            id: id.to_string(),
        }
    }

    pub fn poll_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Poll",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for both decode failures and links whose flags no longer exist.
    /// The UI shows the same "invalid or expired link" state for either.
    pub fn is_bad_link(&self) -> bool {
        matches!(self, Self::InvalidToken(_) | Self::ExpiredLink)
    }
}
