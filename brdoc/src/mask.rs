//! Punctuation layout of formatted registry numbers.
//!
//! A [`Mask`] is the raw digit count plus the separators the formatted form
//! carries at fixed offsets:
//!
//! ```text
//! CPF   NNN.NNN.NNN-DD        raw 11, separators at 3, 7, 11
//! CNPJ  NN.NNN.NNN/NNNN-DD    raw 14, separators at 2, 6, 10, 15
//! ```
//!
//! Lengths and offsets count characters, not bytes, so slicing never lands
//! inside a multi-byte character.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// A punctuation character at a fixed offset of the formatted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator {
    position: usize,
    symbol: char,
}

impl Separator {
    pub const fn new(position: usize, symbol: char) -> Self {
        Separator { position, symbol }
    }

    /// Offset of the separator in the formatted form.
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn symbol(&self) -> char {
        self.symbol
    }
}

/// Fixed punctuation layout of an identifier.
///
/// Separators must be listed in ascending position order and every position
/// must fall inside the formatted length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    raw_len: usize,
    separators: &'static [Separator],
}

impl Mask {
    pub const fn new(raw_len: usize, separators: &'static [Separator]) -> Self {
        Mask {
            raw_len,
            separators,
        }
    }

    /// Number of characters in the raw form.
    pub const fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Number of characters in the formatted form.
    pub const fn formatted_len(&self) -> usize {
        self.raw_len + self.separators.len()
    }

    pub const fn separators(&self) -> &'static [Separator] {
        self.separators
    }

    fn separator_at(&self, position: usize) -> Option<&Separator> {
        self.separators.iter().find(|s| s.position == position)
    }

    /// Inserts punctuation into a raw string.
    ///
    /// Input whose length is not the raw length is returned unchanged. The
    /// characters themselves are not inspected.
    ///
    /// # Example
    ///
    /// ```
    /// use brdoc::{Mask, Separator};
    ///
    /// const MASK: Mask = Mask::new(4, &[Separator::new(2, '-')]);
    ///
    /// assert_eq!(MASK.format("1234"), "12-34");
    /// assert_eq!(MASK.format("12-34"), "12-34");
    /// ```
    pub fn format<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if s.chars().count() != self.raw_len {
            return Cow::Borrowed(s);
        }

        let mut formatted = String::with_capacity(self.formatted_len());
        let mut raw = s.chars();
        for position in 0..self.formatted_len() {
            match self.separator_at(position) {
                Some(separator) => formatted.push(separator.symbol),
                None => {
                    if let Some(c) = raw.next() {
                        formatted.push(c);
                    }
                }
            }
        }
        Cow::Owned(formatted)
    }

    /// Removes punctuation from a formatted string.
    ///
    /// Characters at the separator offsets are cut out by position, whatever
    /// they hold. Input whose length is not the formatted length is returned
    /// unchanged.
    pub fn filter<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if s.chars().count() != self.formatted_len() {
            return Cow::Borrowed(s);
        }

        Cow::Owned(
            s.chars()
                .enumerate()
                .filter(|(position, _)| self.separator_at(*position).is_none())
                .map(|(_, c)| c)
                .collect(),
        )
    }

    /// Checks that a formatted string has every separator in place.
    ///
    /// Digit positions are not inspected.
    pub fn check_separators(&self, s: &str) -> Result<()> {
        let chars = s.chars().collect::<Vec<char>>();
        if chars.len() != self.formatted_len() {
            return Err(Error::InvalidLength {
                expected: self.formatted_len(),
                found: chars.len(),
            });
        }

        for separator in self.separators {
            let found = chars[separator.position];
            if found != separator.symbol {
                return Err(Error::MissingSeparator {
                    position: separator.position,
                    expected: separator.symbol,
                    found,
                });
            }
        }
        Ok(())
    }
}
