//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod poll;
pub mod scoring;
pub mod share;
pub mod share_token;

pub use entities::{
    Answer, AnswerOption, Flag, FlagKind, Poll, PollItem, Question, Quiz, QuizCatalog,
    RedFlagCatalog, ResultBucket, ScoringMode, Vote,
};
pub use errors::DomainError;
pub use poll::{ItemVerdict, PollSummary};
pub use scoring::{QuizOutcome, Tally};
pub use share::ShareMessage;
pub use share_token::FlagSelection;
