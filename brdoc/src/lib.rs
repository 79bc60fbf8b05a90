//! # brdoc
//!
//! Core building blocks for Brazilian registry numbers such as CPF and CNPJ.
//!
//! Every identifier of this family has the same anatomy:
//!
//! ```text
//! body digits + 2 check digits      (raw form)
//! raw form + fixed punctuation      (formatted form)
//! ```
//!
//! This crate describes that anatomy once:
//!
//! - [`Mask`] knows where the punctuation of the formatted form sits and
//!   converts between raw and formatted strings.
//! - [`Modulus11`] computes and verifies the two check digits.
//! - [`Identifier`] ties a mask and a checksum together and provides
//!   validation, formatting, filtering and parsing on top of them.
//!
//! ## Example
//!
//! ```
//! use brdoc::{Identifier, Mask, Modulus11, Separator};
//!
//! struct Cpf;
//!
//! impl Identifier for Cpf {
//!     const NAME: &'static str = "CPF";
//!     const MASK: Mask = Mask::new(
//!         11,
//!         &[
//!             Separator::new(3, '.'),
//!             Separator::new(7, '.'),
//!             Separator::new(11, '-'),
//!         ],
//!     );
//!     const CHECKSUM: Modulus11 = Modulus11::new(9, 11);
//! }
//!
//! assert!(Cpf::is_valid("111.444.777-35"));
//! assert_eq!(Cpf::format("11144477735"), "111.444.777-35");
//! assert_eq!(Cpf::filter("111.444.777-35"), "11144477735");
//! ```

#![forbid(unsafe_code)]

pub mod checksum;
pub mod error;
pub mod identifier;
pub mod mask;

pub use checksum::{CheckDigits, Modulus11};
pub use error::{Error, Result};
pub use identifier::{Identifier, Verified};
pub use mask::{Mask, Separator};
