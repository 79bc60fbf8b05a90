//! Error types for CPF and CNPJ parsing.

use thiserror::Error;

/// Result type for CPF and CNPJ operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when a string cannot be turned into a typed CPF, CNPJ or
/// [`Document`](crate::Document).
///
/// The boolean and passthrough operations never produce these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("CPF: {0}")]
    Cpf(#[source] brdoc::Error),

    #[error("CNPJ: {0}")]
    Cnpj(#[source] brdoc::Error),

    /// The length matches neither a CPF nor a CNPJ, raw or formatted
    #[error("unrecognized document: length {length} is neither a CPF (11, 14) nor a CNPJ (14, 18)")]
    UnrecognizedShape { length: usize },
}

