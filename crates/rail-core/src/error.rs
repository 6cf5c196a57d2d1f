//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`DataError`, `LoadError`,
//! `TravelError`, `SimError`, `OutputError`) and either convert `RailError`
//! into one of their variants or map it at the call site, whichever keeps
//! error sites clean.

use thiserror::Error;

/// The base error type for `rail-core` and a common currency for sub-crates.
#[derive(Debug, Error)]
pub enum RailError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `rail-core` operations.
pub type RailResult<T> = Result<T, RailError>;
