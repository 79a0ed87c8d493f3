//! Numbers with a canonical decimal form.
//!
//! Integers are held as canonical decimal text so any magnitude survives
//! without truncation. Floats are IEEE-754 doubles rendered through the
//! shortest round-trip form, which always carries a fractional part or an
//! exponent; an integer and a float therefore never share a canonical text.
//! Exponents carry no `+` sign (`1e20`, `1e-7`).

use crate::error::InvalidNumber;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Number(Repr);

#[derive(Clone, Debug)]
enum Repr {
    /// Canonical: optional `-`, no leading zeros, never `-0`.
    Integer(String),
    /// Never negative zero.
    Float(f64),
}

impl Number {
    pub fn from_f64(f: f64) -> Self {
        // `-0.0 == 0.0`, so both collapse onto positive zero.
        let f = if f == 0.0 { 0.0 } else { f };
        Number(Repr::Float(f))
    }

    /// Parse a JSON number literal, keeping every digit of integers.
    ///
    /// Fractions and exponents become doubles; `None` only for text that is
    /// not a number at all.
    pub(crate) fn from_json_text(text: &str) -> Option<Self> {
        text.parse::<Number>()
            .ok()
            .or_else(|| text.parse::<f64>().ok().map(Number::from_f64))
    }

    /// The canonical decimal text used in sort keys and notation.
    pub fn canonical(&self) -> String {
        match &self.0 {
            Repr::Integer(digits) => digits.clone(),
            Repr::Float(f) => float_text(*f),
        }
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Shortest round-trip digits; exponent form below 1e-4 and from 1e16.
    format!("{f:?}")
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Integer(a), Repr::Integer(b)) => a == b,
            (Repr::Float(a), Repr::Float(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Repr::Integer(digits) => {
                state.write_u8(0);
                digits.hash(state);
            }
            Repr::Float(f) => {
                state.write_u8(1);
                // Every NaN is equal, so every NaN hashes alike.
                let bits = if f.is_nan() { f64::NAN.to_bits() } else { f.to_bits() };
                bits.hash(state);
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Integer(digits) => f.write_str(digits),
            Repr::Float(x) => f.write_str(&float_text(*x)),
        }
    }
}

/// Parses an integer literal of any magnitude (`-0042` → `-42`).
impl FromStr for Number {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidNumber(s.to_string()));
        }
        let trimmed = digits.trim_start_matches('0');
        let canonical = if trimmed.is_empty() {
            "0".to_string()
        } else if negative {
            format!("-{trimmed}")
        } else {
            trimmed.to_string()
        };
        Ok(Number(Repr::Integer(canonical)))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number(Repr::Integer(n.to_string()))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::from_f64(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::from_f64(f64::from(f))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Repr::Integer(digits) => {
                if let Ok(i) = digits.parse::<i64>() {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = digits.parse::<u64>() {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_str(digits)
                }
            }
            Repr::Float(f) => serializer.serialize_f64(*f),
        }
    }
}
