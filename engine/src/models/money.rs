//! Money model
//!
//! All monetary values are i64 (cents). Arithmetic on shares and balances is
//! exact integer arithmetic; floating point only ever appears transiently when
//! a percentage is applied, and the result is rounded back to cents
//! immediately.
//!
//! The external form is a decimal with exactly two fraction digits
//! ("12.34", "-0.05"). Parsing and formatting live here; currency symbols and
//! locale are a presentation concern outside the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a decimal money string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("empty money string")]
    Empty,

    #[error("invalid money string: {0:?}")]
    Invalid(String),

    #[error("too many fraction digits (max 2): {0:?}")]
    TooManyFractionDigits(String),

    #[error("money value out of range: {0:?}")]
    OutOfRange(String),
}

/// An exact monetary amount in cents.
///
/// Wraps an `i64` so that cents never mix with other integer quantities.
/// Serialized as the raw cent count.
///
/// # Example
/// ```
/// use splitledger_core::Money;
///
/// let m: Money = "33.34".parse().unwrap();
/// assert_eq!(m.cents(), 3334);
/// assert_eq!(m.to_string(), "33.34");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// One minimal currency unit (0.01).
    ///
    /// Every "is this balance effectively zero" check in the engine uses this
    /// constant; balances within one cent of zero are treated as settled.
    pub const TOLERANCE: Money = Money(1);

    /// Construct from a cent count
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Raw cent count
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Absolute value
    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    /// Sign of the amount (-1, 0, 1)
    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    /// True if exactly zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True if strictly greater than zero
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// True if the amount is zero within tolerance (|amount| <= 0.01)
    pub fn is_settled(self) -> bool {
        self.0.abs() <= Money::TOLERANCE.0
    }

    /// Nearest-cent share of `self` divided into `parts` equal portions.
    ///
    /// Rounds half away from zero, matching decimal round-to-2-places on the
    /// quotient. The caller is responsible for reconciling the rounding
    /// difference across shares (see the split calculator).
    pub(crate) fn divided_by(self, parts: i64) -> Money {
        debug_assert!(parts > 0);
        Money(div_round(self.0, parts))
    }

    /// Nearest-cent percentage of `self` (`percent` out of 100).
    pub(crate) fn percent_of(self, percent: f64) -> Money {
        Money(((percent / 100.0) * self.0 as f64).round() as i64)
    }
}

/// Integer division rounding half away from zero. `denom` must be positive.
fn div_round(numer: i64, denom: i64) -> i64 {
    debug_assert!(denom > 0);
    if numer >= 0 {
        (2 * numer + denom) / (2 * denom)
    } else {
        -((2 * -numer + denom) / (2 * denom))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, fraction) = match rest.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::TooManyFractionDigits(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }

        let whole_part: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| ParseMoneyError::OutOfRange(s.to_string()))?
        };

        // A single fraction digit means tens of cents ("2.5" is 2.50).
        let fraction_part: i64 = if fraction.is_empty() {
            0
        } else if fraction.len() == 1 {
            fraction.parse::<i64>().map_err(|_| ParseMoneyError::Invalid(s.to_string()))? * 10
        } else {
            fraction
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?
        };

        let cents = whole_part
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_part))
            .ok_or_else(|| ParseMoneyError::OutOfRange(s.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}
