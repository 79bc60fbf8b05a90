//! Error types for registry number parsing.

use thiserror::Error;

use crate::checksum::CheckDigits;

/// Result type for registry number operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or verifying a registry number.
///
/// Positions are character offsets into the string that was inspected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input has neither the raw nor the formatted length
    #[error("unrecognized length {found}: expected {raw} (raw) or {formatted} (formatted)")]
    UnrecognizedLength {
        raw: usize,
        formatted: usize,
        found: usize,
    },

    /// The digit string handed to the checksum has the wrong length
    #[error("invalid length {found}: expected {expected}")]
    InvalidLength { expected: usize, found: usize },

    /// A character in a digit position is not a decimal digit
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    /// A formatted string lacks punctuation at a required offset
    #[error("missing separator {expected:?} at position {position}, found {found:?}")]
    MissingSeparator {
        position: usize,
        expected: char,
        found: char,
    },

    /// The trailing check digits do not match the computed ones
    #[error("check digits mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: CheckDigits, found: String },
}
