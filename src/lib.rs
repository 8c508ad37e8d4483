//! truth-signals: relationship quizzes, red-flag polls and shareable flag
//! cards, laid out as a small hexagon (domain / ports / use cases / adapters).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
