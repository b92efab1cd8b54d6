//! Input coercion: number-like values → `SafeInt`.
//!
//! - Integers pass through unchanged.
//! - Floats are truncated toward zero; NaN and ±Infinity are rejected.
//! - Text is read leniently: leading whitespace, an optional sign, then the
//!   longest run of ASCII decimal digits. Whatever follows the digits is
//!   ignored (`"12.7"` reads as 12, `"42abc"` as 42).
//!
//! Every check completes here, before any words are produced.

use core::fmt;

use crate::errors::{WordsError, WordsResult};

/// Largest magnitude accepted for conversion (2^53).
pub const MAX: u64 = 9_007_199_254_740_992;

/// Raw input as handed over by a caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberInput<'a> {
    Int(i128),
    Float(f64),
    Text(&'a str),
}

impl fmt::Display for NumberInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Int(v) => write!(f, "{v}"),
            NumberInput::Float(v) => write!(f, "{v}"),
            NumberInput::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! int_input {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for NumberInput<'_> {
                #[inline]
                fn from(v: $t) -> Self { NumberInput::Int(v as i128) }
            }
        )+
    };
}

int_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for NumberInput<'_> {
    #[inline]
    fn from(v: f64) -> Self { NumberInput::Float(v) }
}

impl From<f32> for NumberInput<'_> {
    #[inline]
    fn from(v: f32) -> Self { NumberInput::Float(v as f64) }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    #[inline]
    fn from(s: &'a str) -> Self { NumberInput::Text(s) }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    #[inline]
    fn from(s: &'a String) -> Self { NumberInput::Text(s.as_str()) }
}

/// Integer with `|n| <= MAX`. Only obtainable through validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SafeInt(i64);

impl SafeInt {
    pub const ZERO: SafeInt = SafeInt(0);

    /// Accepts `v` iff its magnitude does not exceed [`MAX`].
    pub fn new(v: i128) -> Option<Self> {
        if v.unsigned_abs() <= MAX as u128 {
            Some(SafeInt(v as i64))
        } else {
            None
        }
    }

    #[inline] pub fn get(self) -> i64 { self.0 }
    #[inline] pub fn is_negative(self) -> bool { self.0 < 0 }
    #[inline] pub fn is_zero(self) -> bool { self.0 == 0 }

    /// Absolute value; never exceeds [`MAX`].
    #[inline]
    pub fn magnitude(self) -> u64 { self.0.unsigned_abs() }
}

impl fmt::Display for SafeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for SafeInt {
    type Error = WordsError;
    fn try_from(v: i64) -> Result<Self, Self::Error> {
        coerce(v)
    }
}

/// Coerce any supported input into a validated [`SafeInt`].
///
/// Errors:
/// - `WordsError::NotFinite` for NaN, ±Infinity, or text without leading digits.
/// - `WordsError::OutOfRange` when the truncated magnitude exceeds [`MAX`].
pub fn coerce<'a>(input: impl Into<NumberInput<'a>>) -> WordsResult<SafeInt> {
    let input = input.into();
    let value = match input {
        NumberInput::Int(v) => v,
        NumberInput::Float(v) => {
            if !v.is_finite() {
                return Err(not_finite(&input));
            }
            let t = v.trunc();
            if t.abs() > MAX as f64 {
                return Err(out_of_range(&input));
            }
            t as i128
        }
        NumberInput::Text(s) => match leading_int(s) {
            Some(v) => v,
            None => return Err(not_finite(&input)),
        },
    };
    SafeInt::new(value).ok_or_else(|| out_of_range(&input))
}

/// Reads `[ws][+|-]digits...`; `None` when no digit follows the sign.
/// Magnitudes past `u64::MAX` saturate so the range check still rejects them.
fn leading_int(s: &str) -> Option<i128> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen = false;
    let mut acc: u128 = 0;
    for b in rest.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        acc = acc.saturating_mul(10).saturating_add(u128::from(b - b'0'));
    }
    if !seen {
        return None;
    }

    let magnitude = acc.min(u128::from(u64::MAX)) as i128;
    Some(if negative { -magnitude } else { magnitude })
}

fn not_finite(input: &NumberInput<'_>) -> WordsError {
    tracing::debug!(%input, "rejected input: not a finite number");
    WordsError::NotFinite { input: input.to_string() }
}

fn out_of_range(input: &NumberInput<'_>) -> WordsError {
    tracing::debug!(%input, max = MAX, "rejected input: outside safe integer range");
    WordsError::OutOfRange { input: input.to_string() }
}
