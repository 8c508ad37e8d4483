//! Infrastructure adapters. Implement ports.
//!
//! Content files, terminal UI. Map errors to DomainError.

pub mod content;
pub mod ui;
