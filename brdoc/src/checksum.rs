//! Modulo-11 check digits.
//!
//! Both check digits are computed the same way. Each digit of the input is
//! multiplied by a weight; weights are assigned from the rightmost digit
//! leftwards as `2, 3, ..., max_weight` and then wrap back to `2`. The check
//! digit is `11 - sum % 11`, or `0` when that is 10 or 11.
//!
//! The first check digit is computed over the body. The second one is
//! computed over the body followed by the first check digit.
//!
//! ```text
//! CPF   body 9,  max_weight 11   weights 10 9 8 7 6 5 4 3 2
//! CNPJ  body 12, max_weight 9    weights 5 4 3 2 9 8 7 6 5 4 3 2
//! ```

use std::fmt::{Display, Formatter};

use tracing::trace;

use crate::error::{Error, Result};

/// The two check digits of a registry number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckDigits([u8; 2]);

impl CheckDigits {
    pub fn first(&self) -> u8 {
        self.0[0]
    }

    pub fn second(&self) -> u8 {
        self.0[1]
    }
}

impl Display for CheckDigits {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl PartialEq<&str> for CheckDigits {
    fn eq(&self, other: &&str) -> bool {
        match other.as_bytes() {
            [first, second] => *first == b'0' + self.0[0] && *second == b'0' + self.0[1],
            _ => false,
        }
    }
}

/// Weighted-sum modulo-11 checksum over a fixed number of body digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus11 {
    body_len: usize,
    max_weight: u32,
}

impl Modulus11 {
    /// `max_weight` must be at least 3.
    pub const fn new(body_len: usize, max_weight: u32) -> Self {
        Modulus11 {
            body_len,
            max_weight,
        }
    }

    pub const fn body_len(&self) -> usize {
        self.body_len
    }

    /// Length of the body plus its check digits.
    pub const fn raw_len(&self) -> usize {
        self.body_len + 2
    }

    /// Computes the check digits of `body`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `body` does not have exactly
    /// `body_len` characters and [`Error::NonDigit`] for the first character
    /// that is not an ASCII decimal digit.
    ///
    /// # Example
    ///
    /// ```
    /// use brdoc::Modulus11;
    ///
    /// let cpf = Modulus11::new(9, 11);
    /// assert_eq!(cpf.check_digits("111444777").unwrap(), "35");
    /// ```
    pub fn check_digits(&self, body: &str) -> Result<CheckDigits> {
        let found = body.chars().count();
        if found != self.body_len {
            return Err(Error::InvalidLength {
                expected: self.body_len,
                found,
            });
        }

        let mut digits = body
            .chars()
            .enumerate()
            .map(|(position, c)| match c.to_digit(10) {
                Some(d) => Ok(d),
                None => Err(Error::NonDigit { position, found: c }),
            })
            .collect::<Result<Vec<u32>>>()?;

        let first = self.digit(&digits);
        digits.push(first);
        let second = self.digit(&digits);

        Ok(CheckDigits([first as u8, second as u8]))
    }

    /// Verifies the trailing check digits of `raw` against its body.
    ///
    /// Returns the verified check digits.
    pub fn verify(&self, raw: &str) -> Result<CheckDigits> {
        let found = raw.chars().count();
        if found != self.raw_len() {
            return Err(Error::InvalidLength {
                expected: self.raw_len(),
                found,
            });
        }

        let split = raw
            .char_indices()
            .nth(self.body_len)
            .map(|(i, _)| i)
            .unwrap_or(raw.len());
        let (body, tail) = raw.split_at(split);
        let expected = self.check_digits(body)?;
        if expected != tail {
            trace!(%expected, found = tail, "check digits mismatch");
            return Err(Error::ChecksumMismatch {
                expected,
                found: tail.to_string(),
            });
        }
        Ok(expected)
    }

    fn weight(&self, offset_from_right: usize) -> u32 {
        2 + offset_from_right as u32 % (self.max_weight - 1)
    }

    fn digit(&self, digits: &[u32]) -> u32 {
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(offset, d)| d * self.weight(offset))
            .sum();
        match 11 - sum % 11 {
            d if d > 9 => 0,
            d => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const CPF: Modulus11 = Modulus11::new(9, 11);
    const CNPJ: Modulus11 = Modulus11::new(12, 9);

    #[rstest(
        body,
        expected,
        case("111444777", "35"),
        case("529982247", "25"),
        case("000000000", "00"),
        // 11 - 210 % 11 is 10, which clamps to 0
        case("123456789", "09")
    )]
    fn test_cpf_check_digits(body: &str, expected: &str) {
        assert_eq!(CPF.check_digits(body).unwrap(), expected);
    }

    #[rstest(
        body,
        expected,
        case("112223330001", "81"),
        case("114447770001", "61"),
        case("000000000000", "00")
    )]
    fn test_cnpj_check_digits(body: &str, expected: &str) {
        assert_eq!(CNPJ.check_digits(body).unwrap(), expected);
    }

    #[rstest(
        max_weight,
        expected,
        case(11, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
        case(9, vec![2, 3, 4, 5, 6, 7, 8, 9, 2, 3])
    )]
    fn test_weights(max_weight: u32, expected: Vec<u32>) {
        let checksum = Modulus11::new(9, max_weight);
        let weights = (0..10).map(|i| checksum.weight(i)).collect::<Vec<_>>();
        assert_eq!(weights, expected);
    }

    #[rstest(
        body,
        expected,
        case("11144477a", Error::NonDigit { position: 8, found: 'a' }),
        case(" 11444777", Error::NonDigit { position: 0, found: ' ' }),
        case("1114447770", Error::InvalidLength { expected: 9, found: 10 }),
        case("", Error::InvalidLength { expected: 9, found: 0 })
    )]
    fn test_check_digits_error(body: &str, expected: Error) {
        assert_eq!(CPF.check_digits(body).unwrap_err(), expected);
    }

    #[test]
    fn test_check_digits_deterministic() {
        assert_eq!(
            CNPJ.check_digits("112223330001").unwrap(),
            CNPJ.check_digits("112223330001").unwrap()
        );
    }

    #[rstest(
        raw,
        expected,
        case("11144477735", Ok("35")),
        case("11144477736", Err(Error::ChecksumMismatch {
            expected: CPF.check_digits("111444777").unwrap(),
            found: "36".to_string(),
        })),
        case("1114447773x", Err(Error::ChecksumMismatch {
            expected: CPF.check_digits("111444777").unwrap(),
            found: "3x".to_string(),
        })),
        case("111444777355", Err(Error::InvalidLength { expected: 11, found: 12 }))
    )]
    fn test_verify(raw: &str, expected: std::result::Result<&str, Error>) {
        match (CPF.verify(raw), expected) {
            (Ok(got), Ok(want)) => assert_eq!(got, want),
            (Err(got), Err(want)) => assert_eq!(got, want),
            (got, want) => panic!("expected {want:?}, got {got:?}"),
        }
    }

    #[test]
    fn test_check_digits_display() {
        let digits = CPF.check_digits("123456789").unwrap();
        assert_eq!(digits.to_string(), "09");
        assert_eq!(digits.first(), 0);
        assert_eq!(digits.second(), 9);
    }
}
