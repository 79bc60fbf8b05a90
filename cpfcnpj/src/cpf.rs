//! CPF (Cadastro de Pessoas Físicas), the individual taxpayer number.
//!
//! ```text
//! raw        11144477735
//! formatted  111.444.777-35
//!                        ^^ check digits
//! ```

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use brdoc::{CheckDigits, Identifier, Mask, Modulus11, Separator, Verified};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// `NNN.NNN.NNN-DD`
pub const MASK: Mask = Mask::new(
    11,
    &[
        Separator::new(3, '.'),
        Separator::new(7, '.'),
        Separator::new(11, '-'),
    ],
);

/// Weights 10..=2 for the first digit and 11..=2 for the second.
pub const CHECKSUM: Modulus11 = Modulus11::new(9, 11);

/// A CPF whose check digits have been verified.
///
/// Built with [`FromStr`] from either the raw or the formatted form.
/// Displays and serializes in the formatted form.
///
/// # Example
///
/// ```
/// use cpfcnpj::Cpf;
///
/// let cpf: Cpf = "11144477735".parse().unwrap();
/// assert_eq!(cpf.to_string(), "111.444.777-35");
/// assert_eq!(cpf.as_str(), "11144477735");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf(Verified);

impl Identifier for Cpf {
    const NAME: &'static str = "CPF";
    const MASK: Mask = MASK;
    const CHECKSUM: Modulus11 = CHECKSUM;
}

impl Cpf {
    /// The raw 11 digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The `NNN.NNN.NNN-DD` form.
    pub fn formatted(&self) -> String {
        MASK.format(self.0.as_str()).into_owned()
    }

    pub fn check_digits(&self) -> CheckDigits {
        self.0.check_digits()
    }
}

impl FromStr for Cpf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Cpf as Identifier>::parse(s).map(Cpf).map_err(Error::Cpf)
    }
}

impl Display for Cpf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", MASK.format(self.0.as_str()))
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns `true` if `s` is a valid raw or formatted CPF.
pub fn is_valid(s: &str) -> bool {
    <Cpf as Identifier>::is_valid(s)
}

/// Formats an 11-character string as `NNN.NNN.NNN-DD`.
///
/// Any other input is returned unchanged.
pub fn format(s: &str) -> Cow<'_, str> {
    <Cpf as Identifier>::format(s)
}

/// Strips the punctuation of a 14-character formatted CPF.
///
/// Any other input is returned unchanged.
pub fn filter(s: &str) -> Cow<'_, str> {
    <Cpf as Identifier>::filter(s)
}

/// Computes the two check digits of a 9-digit CPF body.
pub fn check_digits(body: &str) -> crate::error::Result<CheckDigits> {
    Cpf::compute_check_digits(body).map_err(Error::Cpf)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_mask_and_checksum_agree() {
        assert_eq!(MASK.raw_len(), CHECKSUM.raw_len());
        assert_eq!(MASK.formatted_len(), 14);
    }

    #[rstest(
        input,
        expected,
        case("11144477735", true),
        case("111.444.777-35", true),
        case("52998224725", true),
        case("529.982.247-25", true),
        case("00000000000", true),
        // wrong check digits
        case("11144477736", false),
        case("111.444.777-53", false),
        // wrong length
        case("111444777735", false),
        case("1114447773", false),
        case("", false),
        // separators misplaced or wrong
        case("111-444-777.35", false),
        case("111.444.777.35", false),
        case("1114.44.777-35", false),
        // non-digit characters in digit positions
        case("1114447773a", false),
        case("a11.444.777-35", false),
        case("１１１４４４７７７３５", false)
    )]
    fn test_is_valid(input: &str, expected: bool) {
        assert_eq!(is_valid(input), expected);
    }

    #[rstest(
        input,
        expected,
        case("11144477735", "111.444.777-35"),
        case("111.444.777-35", "111.444.777-35"),
        case("1114447773", "1114447773"),
        case("abcdefghijk", "abc.def.ghi-jk")
    )]
    fn test_format(input: &str, expected: &str) {
        assert_eq!(format(input), expected);
    }

    #[rstest(
        input,
        expected,
        case("111.444.777-35", "11144477735"),
        case("11144477735", "11144477735"),
        case("111.444.777-355", "111.444.777-355")
    )]
    fn test_filter(input: &str, expected: &str) {
        assert_eq!(filter(input), expected);
    }

    #[rstest(raw, case("11144477735"), case("52998224725"))]
    fn test_round_trip(raw: &str) {
        let formatted = format(raw);
        assert_eq!(filter(&formatted), raw);
        assert_eq!(format(&formatted), formatted);
        assert_eq!(format(&filter(&formatted)), formatted);
        assert_eq!(filter(&filter(&formatted)), raw);
    }

    #[rstest(
        body,
        expected,
        case("111444777", "35"),
        case("529982247", "25")
    )]
    fn test_check_digits(body: &str, expected: &str) {
        assert_eq!(check_digits(body).unwrap(), expected);
    }

    #[test]
    fn test_check_digits_non_digit() {
        assert_eq!(
            check_digits("11144477a").unwrap_err(),
            Error::Cpf(brdoc::Error::NonDigit {
                position: 8,
                found: 'a'
            })
        );
    }

    #[test]
    fn test_parse() {
        let cpf: Cpf = "111.444.777-35".parse().unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.formatted(), "111.444.777-35");
        assert_eq!(cpf.to_string(), "111.444.777-35");
        assert_eq!(cpf.check_digits(), "35");
        assert_eq!(cpf, "11144477735".parse::<Cpf>().unwrap());
    }

    #[test]
    fn test_parse_error() {
        let err = "111.444.777.35".parse::<Cpf>().unwrap_err();
        assert_eq!(
            err,
            Error::Cpf(brdoc::Error::MissingSeparator {
                position: 11,
                expected: '-',
                found: '.'
            })
        );
    }

    #[test]
    fn test_serde() {
        let cpf: Cpf = "11144477735".parse().unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, r#""111.444.777-35""#);
        let back: Cpf = serde_json::from_str(r#""11144477735""#).unwrap();
        assert_eq!(back, cpf);
        assert!(serde_json::from_str::<Cpf>(r#""11144477736""#).is_err());
    }
}
