//! Arbitrary-precision integer keys.
//!
//! Keys that fit in an `i64` are compared natively; anything wider falls back
//! to [`BigInt`]. The representation is private and normalized on
//! construction, so a wide key is always outside the `i64` range and ordering
//! between the two forms is decided by the sign of the wide one.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key")]
    Empty,
    #[error("invalid digit in key")]
    InvalidDigit,
}

/// Signed integer key of unbounded magnitude.
///
/// Built through `From<i64>`, `From<BigInt>` or [`FromStr`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(Repr);

/// Invariant: `Big` never holds a value that fits in an `i64`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Repr {
    Small(i64),
    Big(BigInt),
}

impl Key {
    /// Whether this key needed the arbitrary-precision representation.
    pub fn is_big(&self) -> bool {
        matches!(self.0, Repr::Big(_))
    }

    /// The key as an `i64`, if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::Small(n) => Some(n),
            Repr::Big(_) => None,
        }
    }

    /// Widens the key to a [`BigInt`].
    pub fn to_bigint(&self) -> BigInt {
        match &self.0 {
            Repr::Small(n) => BigInt::from(*n),
            Repr::Big(n) => n.clone(),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key(Repr::Small(n))
    }
}

impl From<BigInt> for Key {
    fn from(n: BigInt) -> Self {
        match n.to_i64() {
            Some(small) => Key(Repr::Small(small)),
            None => Key(Repr::Big(n)),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parses an optional `-` followed by ASCII decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() {
            return Err(if s.is_empty() {
                KeyParseError::Empty
            } else {
                KeyParseError::InvalidDigit
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyParseError::InvalidDigit);
        }
        // Overflow is the only way the native parse can fail at this point.
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Key::from(n));
        }
        BigInt::from_str(s)
            .map(Key::from)
            .map_err(|_| KeyParseError::InvalidDigit)
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            (Repr::Big(a), Repr::Big(b)) => a.cmp(b),
            (Repr::Small(_), Repr::Big(b)) => {
                if b.sign() == Sign::Minus {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Repr::Big(a), Repr::Small(_)) => {
                if a.sign() == Sign::Minus {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(n) => write!(f, "{n}"),
            Repr::Big(n) => write!(f, "{n}"),
        }
    }
}
