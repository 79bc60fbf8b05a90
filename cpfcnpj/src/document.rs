//! Operations that accept either a CPF or a CNPJ.
//!
//! The kind of a string is never tagged; it is inferred from its shape on
//! every call:
//!
//! | Length | Disambiguator        | Shape                                      |
//! |--------|----------------------|--------------------------------------------|
//! | 11     |                      | [`Shape::CpfRaw`]                          |
//! | 14     | index 3 is `.`       | [`Shape::CpfFormatted`]                    |
//! | 14     | index 3 is not `.`   | [`Shape::CnpjRaw`]                         |
//! | 18     |                      | [`Shape::CnpjFormatted`]                   |
//!
//! A formatted CPF and a raw CNPJ are both 14 characters long. A raw CNPJ
//! holds a digit at index 3 where a formatted CPF holds its first period, so
//! that single character decides between them.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use brdoc::{CheckDigits, Identifier};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::cnpj::{self, Cnpj};
use crate::cpf::{self, Cpf};
use crate::error::Error;

/// Offset of the first CPF separator, used to tell a formatted CPF from a
/// raw CNPJ.
const CPF_FIRST_SEPARATOR: usize = 3;

/// Which registry an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    Cpf,
    Cnpj,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Cpf => write!(f, "{}", Cpf::NAME),
            Kind::Cnpj => write!(f, "{}", Cnpj::NAME),
        }
    }
}

/// The structural layout of a candidate string.
///
/// Detecting a shape says nothing about validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// 11 characters
    CpfRaw,
    /// 14 characters with `.` at index 3
    CpfFormatted,
    /// 14 characters without `.` at index 3
    CnpjRaw,
    /// 18 characters
    CnpjFormatted,
}

impl Shape {
    /// Classifies `s` by its character length and, for length 14, the
    /// character at index 3. Returns `None` for any other length.
    pub fn detect(s: &str) -> Option<Shape> {
        let length = s.chars().count();
        let shape = if length == cpf::MASK.raw_len() {
            Some(Shape::CpfRaw)
        } else if length == cnpj::MASK.formatted_len() {
            Some(Shape::CnpjFormatted)
        } else if length == cpf::MASK.formatted_len() {
            if s.chars().nth(CPF_FIRST_SEPARATOR) == Some('.') {
                Some(Shape::CpfFormatted)
            } else {
                Some(Shape::CnpjRaw)
            }
        } else {
            None
        };
        trace!(length, ?shape, "detected document shape");
        shape
    }

    pub fn kind(self) -> Kind {
        match self {
            Shape::CpfRaw | Shape::CpfFormatted => Kind::Cpf,
            Shape::CnpjRaw | Shape::CnpjFormatted => Kind::Cnpj,
        }
    }

    pub fn is_formatted(self) -> bool {
        matches!(self, Shape::CpfFormatted | Shape::CnpjFormatted)
    }
}

/// Returns `true` if `s` is a valid CPF or CNPJ, raw or formatted.
///
/// The string is routed by [`Shape::detect`] and then validated by the
/// routed kind only.
///
/// # Example
///
/// ```
/// assert!(cpfcnpj::is_valid("111.444.777-35"));
/// assert!(cpfcnpj::is_valid("11222333000181"));
/// assert!(!cpfcnpj::is_valid("1122233300018"));
/// ```
pub fn is_valid(s: &str) -> bool {
    match Shape::detect(s).map(Shape::kind) {
        Some(Kind::Cpf) => cpf::is_valid(s),
        Some(Kind::Cnpj) => cnpj::is_valid(s),
        None => false,
    }
}

/// Adds punctuation to a raw CPF or CNPJ.
///
/// Anything that is not a raw shape is returned unchanged.
pub fn format(s: &str) -> Cow<'_, str> {
    match Shape::detect(s) {
        Some(Shape::CpfRaw) => cpf::format(s),
        Some(Shape::CnpjRaw) => cnpj::format(s),
        _ => Cow::Borrowed(s),
    }
}

/// Removes punctuation from a formatted CPF or CNPJ.
///
/// Anything that is not a formatted shape is returned unchanged.
pub fn filter(s: &str) -> Cow<'_, str> {
    match Shape::detect(s) {
        Some(Shape::CnpjFormatted) => cnpj::filter(s),
        Some(Shape::CpfFormatted) => cpf::filter(s),
        _ => Cow::Borrowed(s),
    }
}

/// A verified CPF or CNPJ.
///
/// Parsing routes the string by [`Shape::detect`] and then parses it as the
/// routed kind, so a string is never tried as both.
///
/// # Example
///
/// ```
/// use cpfcnpj::{Document, Kind};
///
/// let doc: Document = "11222333000181".parse().unwrap();
/// assert_eq!(doc.kind(), Kind::Cnpj);
/// assert_eq!(doc.to_string(), "11.222.333/0001-81");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    pub fn kind(&self) -> Kind {
        match self {
            Document::Cpf(_) => Kind::Cpf,
            Document::Cnpj(_) => Kind::Cnpj,
        }
    }

    /// The raw digits.
    pub fn as_str(&self) -> &str {
        match self {
            Document::Cpf(cpf) => cpf.as_str(),
            Document::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    pub fn formatted(&self) -> String {
        match self {
            Document::Cpf(cpf) => cpf.formatted(),
            Document::Cnpj(cnpj) => cnpj.formatted(),
        }
    }

    pub fn check_digits(&self) -> CheckDigits {
        match self {
            Document::Cpf(cpf) => cpf.check_digits(),
            Document::Cnpj(cnpj) => cnpj.check_digits(),
        }
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Document::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Document::Cnpj(cnpj)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Shape::detect(s).map(Shape::kind) {
            Some(Kind::Cpf) => s.parse().map(Document::Cpf),
            Some(Kind::Cnpj) => s.parse().map(Document::Cnpj),
            None => Err(Error::UnrecognizedShape {
                length: s.chars().count(),
            }),
        }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::Cpf(cpf) => Display::fmt(cpf, f),
            Document::Cnpj(cnpj) => Display::fmt(cnpj, f),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Document::Cpf(cpf) => cpf.serialize(serializer),
            Document::Cnpj(cnpj) => cnpj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
