//! Money type for representing expense amounts
//!
//! Wraps an exact base-10 decimal so that sums over many expenses never drift
//! the way binary floating point does. On disk an amount is a plain JSON
//! number, so only amounts that survive the trip through `f64` unchanged are
//! accepted: below [`MAX_WHOLE_UNITS`] in magnitude and with at most
//! [`MAX_SIGNIFICANT_DIGITS`] significant digits.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Amounts must be strictly below this many whole currency units
pub const MAX_WHOLE_UNITS: i64 = 1_000_000_000_000;

/// Most significant digits an `f64` carries for every decimal value
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

/// A monetary amount in an implicit currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check the magnitude is below [`MAX_WHOLE_UNITS`]
    pub fn is_within_bounds(&self) -> bool {
        self.0.abs() < Decimal::from(MAX_WHOLE_UNITS)
    }

    /// Amount rounded to whole cents, midpoint away from zero
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5", "1e3".
    /// Numbers that cannot be stored exactly are rejected as out of range or
    /// too precise.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // A second sign after the symbol ("-$-5") is not a number
        if rest.is_empty() || rest.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        // Numeric text the decimal type cannot hold ("1e30", "1e-40")
        let float = rest.parse::<f64>().ok().filter(|f| f.is_finite());
        if float.is_some_and(|f| !fits_decimal(f)) {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        let value = Decimal::from_str(rest)
            .or_else(|_| Decimal::from_scientific(rest))
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        let money = Self(if negative { -value } else { value });
        if !money.is_within_bounds() {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }
        if significant_digits(money.0) > MAX_SIGNIFICANT_DIGITS || !survives_float(money.0) {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        Ok(money)
    }

    /// Parse a money amount that must be strictly greater than zero
    pub fn parse_positive(s: &str) -> Result<Self, MoneyParseError> {
        let money = Self::parse(s)?;
        if !money.is_positive() {
            return Err(MoneyParseError::NotPositive);
        }
        Ok(money)
    }
}

/// Zero, or a magnitude between the smallest decimal step and the bound
fn fits_decimal(f: f64) -> bool {
    let magnitude = f.abs();
    magnitude == 0.0 || (magnitude >= 1e-28 && magnitude < MAX_WHOLE_UNITS as f64)
}

fn significant_digits(value: Decimal) -> u32 {
    let mantissa = value.normalize().mantissa().unsigned_abs();
    if mantissa == 0 {
        0
    } else {
        mantissa.ilog10() + 1
    }
}

/// Same path the value takes through the data file: `f64`, then its text
fn survives_float(value: Decimal) -> bool {
    value
        .to_f64()
        .and_then(|f| Decimal::from_str(&f.to_string()).ok())
        == Some(value)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${:.2}", rounded.abs())
        }
    }
}

// Saturating: bounded amounts never get near the limit, but a sum must not panic
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("could not convert '{0}' to a number")]
    InvalidFormat(String),

    #[error("'{0}' is out of range, amounts must be below {MAX_WHOLE_UNITS}")]
    OutOfRange(String),

    #[error("'{0}' has more than {MAX_SIGNIFICANT_DIGITS} significant digits")]
    TooPrecise(String),

    #[error("Amount should be greater than zero.")]
    NotPositive,
}
