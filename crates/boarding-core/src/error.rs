//! Foundational error type.
//!
//! Sub-crates define their own error enums and chain `CoreError` in via
//! `#[from]` where they surface configuration problems.

use thiserror::Error;

/// The error type for `boarding-core` — today only configuration validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `boarding-core`.
pub type CoreResult<T> = Result<T, CoreError>;
