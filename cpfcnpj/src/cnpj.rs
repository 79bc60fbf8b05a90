//! CNPJ (Cadastro Nacional da Pessoa Jurídica), the company taxpayer number.
//!
//! ```text
//! raw        11222333000181
//! formatted  11.222.333/0001-81
//!            ^^^^^^^^^^        base number
//!                       ^^^^   branch
//!                            ^^ check digits
//! ```

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use brdoc::{CheckDigits, Identifier, Mask, Modulus11, Separator, Verified};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// `NN.NNN.NNN/NNNN-DD`
pub const MASK: Mask = Mask::new(
    14,
    &[
        Separator::new(2, '.'),
        Separator::new(6, '.'),
        Separator::new(10, '/'),
        Separator::new(15, '-'),
    ],
);

/// Weights cycle through 2..=9 from the right.
pub const CHECKSUM: Modulus11 = Modulus11::new(12, 9);

/// A CNPJ whose check digits have been verified.
///
/// Built with [`FromStr`] from either the raw or the formatted form.
/// Displays and serializes in the formatted form.
///
/// # Example
///
/// ```
/// use cpfcnpj::Cnpj;
///
/// let cnpj: Cnpj = "11.222.333/0001-81".parse().unwrap();
/// assert_eq!(cnpj.as_str(), "11222333000181");
/// assert_eq!(cnpj.check_digits().to_string(), "81");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cnpj(Verified);

impl Identifier for Cnpj {
    const NAME: &'static str = "CNPJ";
    const MASK: Mask = MASK;
    const CHECKSUM: Modulus11 = CHECKSUM;
}

impl Cnpj {
    /// The raw 14 digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The `NN.NNN.NNN/NNNN-DD` form.
    pub fn formatted(&self) -> String {
        MASK.format(self.0.as_str()).into_owned()
    }

    pub fn check_digits(&self) -> CheckDigits {
        self.0.check_digits()
    }
}

impl FromStr for Cnpj {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Cnpj as Identifier>::parse(s).map(Cnpj).map_err(Error::Cnpj)
    }
}

impl Display for Cnpj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", MASK.format(self.0.as_str()))
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns `true` if `s` is a valid raw or formatted CNPJ.
pub fn is_valid(s: &str) -> bool {
    <Cnpj as Identifier>::is_valid(s)
}

/// Formats a 14-character string as `NN.NNN.NNN/NNNN-DD`.
///
/// Any other input is returned unchanged.
pub fn format(s: &str) -> Cow<'_, str> {
    <Cnpj as Identifier>::format(s)
}

/// Strips the punctuation of an 18-character formatted CNPJ.
///
/// Any other input is returned unchanged.
pub fn filter(s: &str) -> Cow<'_, str> {
    <Cnpj as Identifier>::filter(s)
}

/// Computes the two check digits of a 12-digit CNPJ body.
pub fn check_digits(body: &str) -> crate::error::Result<CheckDigits> {
    Cnpj::compute_check_digits(body).map_err(Error::Cnpj)
}
