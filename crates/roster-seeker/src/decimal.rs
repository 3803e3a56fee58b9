//! Fixed-point decimal numbers.
//!
//! [`Decimal`] keeps monetary amounts exact: `60000.3` is stored as the
//! integer `600003` with a scale of `1`. Comparison is by numeric value, while
//! [`Display`](std::fmt::Display) keeps the scale the value was written with,
//! so `100000.20` prints as `100000.20`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::SeekerError;

/// Largest supported number of fractional digits.
pub const MAX_SCALE: u32 = 18;

/// An exact decimal number: `mantissa / 10^scale`.
///
/// # Example
///
/// ```
/// use roster_seeker::Decimal;
///
/// let salary = Decimal::new(600003, 1);
/// assert_eq!(salary.to_string(), "60000.3");
/// assert!(salary >= Decimal::from(50000));
/// assert_eq!(Decimal::new(6000030, 2), salary);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    mantissa: i64,
    scale: u32,
}

impl Decimal {
    /// Zero, with no fractional digits.
    pub const ZERO: Decimal = Decimal::new(0, 0);

    /// Creates `mantissa / 10^scale`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds [`MAX_SCALE`].
    pub const fn new(mantissa: i64, scale: u32) -> Self {
        assert!(scale <= MAX_SCALE, "decimal scale out of range");
        Decimal { mantissa, scale }
    }

    /// The unscaled integer value.
    pub fn mantissa(self) -> i64 {
        self.mantissa
    }

    /// Number of fractional digits.
    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Returns `true` if the value is below zero.
    pub fn is_negative(self) -> bool {
        self.mantissa < 0
    }

    /// Drops trailing fractional zeros (`100000.20` becomes `100000.2`).
    pub fn normalize(self) -> Self {
        let mut mantissa = self.mantissa;
        let mut scale = self.scale;
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Decimal { mantissa, scale }
    }

    /// Lossy conversion for comparisons against floating-point numbers.
    pub fn to_f64(self) -> f64 {
        self.mantissa as f64 / 10f64.powi(self.scale as i32)
    }

    /// Mantissa rescaled to `scale` fractional digits. `scale` must not be
    /// below `self.scale`.
    fn widened(self, scale: u32) -> i128 {
        self.mantissa as i128 * 10i128.pow(scale - self.scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.widened(scale).cmp(&other.widened(scale))
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normal = self.normalize();
        normal.mantissa.hash(state);
        normal.scale.hash(state);
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::ZERO
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let magnitude = self.mantissa.unsigned_abs();
        if self.scale == 0 {
            return write!(f, "{sign}{magnitude}");
        }
        let unit = 10u64.pow(self.scale);
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / unit,
            magnitude % unit,
            width = self.scale as usize
        )
    }
}

impl FromStr for Decimal {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| SeekerError::InvalidDecimal {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("unexpected character"));
        }
        if fraction.len() > MAX_SCALE as usize {
            return Err(invalid("too many fractional digits"));
        }

        let mut mantissa: i64 = 0;
        for digit in whole.bytes().chain(fraction.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(digit - b'0')))
                .ok_or_else(|| invalid("out of range"))?;
        }
        if negative {
            mantissa = -mantissa;
        }

        Ok(Decimal {
            mantissa,
            scale: fraction.len() as u32,
        })
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Decimal::new(n, 0)
    }
}

impl From<i32> for Decimal {
    fn from(n: i32) -> Self {
        Decimal::new(n as i64, 0)
    }
}

impl From<u32> for Decimal {
    fn from(n: u32) -> Self {
        Decimal::new(n as i64, 0)
    }
}
