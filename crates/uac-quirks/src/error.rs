//! Error types for quirk construction and conversion.
//!
//! Lookups never fail; they return `Option`. Errors only come from building
//! quirk records out of raw values.

use thiserror::Error;

/// Errors returned when building quirk records from raw values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuirkError {
    #[error("Unknown quirk kind: {0}")]
    UnknownKind(u8),

    #[error("Too many sample rates: at most {max}, got {actual}")]
    TooManySampleRates { max: usize, actual: usize },
}

/// Convenience result alias for quirk operations.
pub type QuirkResult<T> = Result<T, QuirkError>;
