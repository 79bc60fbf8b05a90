//! Identifier trait for registry numbers.
//!
//! An identifier type is described by a [`Mask`] and a [`Modulus11`]
//! checksum. Implementing [`Identifier`] with those two constants provides
//! the whole toolkit:
//!
//! | Operation                | Accepts                  | On unexpected input   |
//! |--------------------------|--------------------------|-----------------------|
//! | `is_valid`               | raw or formatted         | `false`               |
//! | `format`                 | raw                      | input unchanged       |
//! | `filter`                 | formatted                | input unchanged       |
//! | `compute_check_digits`   | body (raw minus 2)       | `Err`                 |
//! | `parse`                  | raw or formatted         | `Err` with the reason |

use std::borrow::Cow;

use crate::checksum::{CheckDigits, Modulus11};
use crate::error::{Error, Result};
use crate::mask::Mask;

/// Raw digits that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Verified {
    raw: String,
    check_digits: CheckDigits,
}

impl Verified {
    /// The raw digit string, without punctuation.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn check_digits(&self) -> CheckDigits {
        self.check_digits
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl AsRef<str> for Verified {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// A registry number kind defined by its punctuation mask and checksum.
///
/// `MASK.raw_len()` must equal `CHECKSUM.raw_len()`.
pub trait Identifier {
    /// Human-readable name, e.g. `"CPF"`.
    const NAME: &'static str;

    /// Punctuation layout of the formatted form.
    const MASK: Mask;

    /// Check digit algorithm.
    const CHECKSUM: Modulus11;

    /// Returns `true` if `s` is a valid raw or formatted identifier.
    ///
    /// A formatted string with a misplaced separator is rejected before any
    /// checksum is computed. Non-digit characters make the input invalid.
    fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Inserts punctuation into a raw string, see [`Mask::format`].
    fn format(s: &str) -> Cow<'_, str> {
        Self::MASK.format(s)
    }

    /// Removes punctuation from a formatted string, see [`Mask::filter`].
    fn filter(s: &str) -> Cow<'_, str> {
        Self::MASK.filter(s)
    }

    /// Computes the check digits of a body, see [`Modulus11::check_digits`].
    fn compute_check_digits(body: &str) -> Result<CheckDigits> {
        Self::CHECKSUM.check_digits(body)
    }

    /// Parses a raw or formatted string into its verified raw digits.
    ///
    /// # Errors
    ///
    /// - [`Error::UnrecognizedLength`] if `s` has neither length.
    /// - [`Error::MissingSeparator`] if a formatted string lacks punctuation.
    /// - [`Error::NonDigit`] if the body holds a non-digit character.
    /// - [`Error::ChecksumMismatch`] if the check digits are wrong.
    fn parse(s: &str) -> Result<Verified> {
        let found = s.chars().count();
        let raw = if found == Self::MASK.raw_len() {
            Cow::Borrowed(s)
        } else if found == Self::MASK.formatted_len() {
            Self::MASK.check_separators(s)?;
            Self::MASK.filter(s)
        } else {
            return Err(Error::UnrecognizedLength {
                raw: Self::MASK.raw_len(),
                formatted: Self::MASK.formatted_len(),
                found,
            });
        };

        let check_digits = Self::CHECKSUM.verify(&raw)?;
        Ok(Verified {
            raw: raw.into_owned(),
            check_digits,
        })
    }
}
