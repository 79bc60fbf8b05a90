//! # cpfcnpj
//!
//! Validation, formatting and normalization of the Brazilian taxpayer
//! numbers CPF (individuals, 11 digits) and CNPJ (companies, 14 digits).
//!
//! The crate root exposes the operations that accept either kind and pick
//! the right one from the shape of the input (see [`Shape`]):
//!
//! ```
//! assert!(cpfcnpj::is_valid("111.444.777-35"));
//! assert_eq!(cpfcnpj::format("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(cpfcnpj::filter("111.444.777-35"), "11144477735");
//! ```
//!
//! The [`cpf`] and [`cnpj`] modules expose the same operations for a single
//! kind. [`Cpf`], [`Cnpj`] and [`Document`] are verified values for callers
//! that want to parse once and carry the result around.
//!
//! None of the boolean or string operations fail: invalid input is `false`,
//! and input that cannot be transformed is returned unchanged.

#![forbid(unsafe_code)]

pub mod cnpj;
pub mod cpf;
pub mod document;
pub mod error;

pub use brdoc::{CheckDigits, Identifier};
pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use document::{Document, Kind, Shape, filter, format, is_valid};
pub use error::{Error, Result};
