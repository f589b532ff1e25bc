//! # Money Module
//!
//! Provides the `Money` type for monetary values and the `Currency` used to
//! display them.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing revenue as floats:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Undo must restore revenue EXACTLY. With floats, +5.1 then -5.1 does   │
//! │  not always land back on the starting value.                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 count of cents. Folding the ledger after     │
//! │    an undo returns the exact same number.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use savn_core::money::{Currency, Money};
//!
//! let price = Money::from_cents(1099);
//! assert_eq!((price * 2).cents(), 2198);
//! assert_eq!(Currency::Usd.format(price), "$10.99");
//!
//! // Shopify sends prices as decimal strings
//! assert_eq!(Money::parse_decimal("19.99"), Some(Money::from_cents(1999)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so the ledger can carry compensating (negative) entries.
/// Arithmetic saturates at the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount; sums and products clamp here.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a user-entered amount in major units (e.g. dollars) to cents.
    ///
    /// This is the only float boundary in the crate: form input arrives as a
    /// number and is rounded to the nearest cent here, once.
    ///
    /// ## Example
    /// ```rust
    /// use savn_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(5.0), Some(Money::from_cents(500)));
    /// assert_eq!(Money::from_major_f64(0.125), Some(Money::from_cents(13)));
    /// assert_eq!(Money::from_major_f64(f64::NAN), None);
    /// ```
    pub fn from_major_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Parses a decimal string (`"19.99"`, `"-5"`, `".5"`) into cents.
    ///
    /// Digits past the second decimal place round half away from zero.
    /// Returns `None` for empty or malformed text.
    ///
    /// ## Example
    /// ```rust
    /// use savn_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("100.00"), Some(Money::from_cents(10000)));
    /// assert_eq!(Money::parse_decimal("0.005"), Some(Money::from_cents(1)));
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().ok()?.checked_mul(100)?
        };

        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        let cents = whole_cents.checked_add(tenths * 10 + hundredths + i64::from(round_up))?;
        Some(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use savn_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// assert_eq!(unit_price.multiply_quantity(i64::MAX), Money::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Divides by a count, rounding half away from zero. Zero count yields zero.
    ///
    /// Used for average order value.
    pub fn divide_rounded(&self, count: u64) -> Money {
        if count == 0 {
            return Money::zero();
        }

        let count = count as i128;
        let value = self.0 as i128;
        let half = count / 2;
        let rounded = if value >= 0 {
            (value + half) / count
        } else {
            (value - half) / count
        };
        Money(rounded as i64)
    }

    /// Returns the value in major units as a float (for ratios and charts only).
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display in dollars. Use [`Currency::format`] for the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Display currency chosen in Settings.
///
/// ## Display Only
/// Amounts are stored in cents regardless of the selection. Switching from
/// USD to VND changes how an amount is rendered, never its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "VND")]
    Vnd,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Vnd => "VND",
        }
    }

    /// Formats an amount for display.
    ///
    /// ```rust
    /// use savn_core::money::{Currency, Money};
    ///
    /// assert_eq!(Currency::Usd.format(Money::from_cents(123450)), "$1,234.50");
    /// assert_eq!(Currency::Usd.format(Money::from_cents(-500)), "-$5.00");
    /// assert_eq!(Currency::Vnd.format(Money::from_cents(1234500)), "12.345 ₫");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let cents = amount.cents().unsigned_abs();

        match self {
            Currency::Usd => format!(
                "{}${}.{:02}",
                sign,
                group_thousands(cents / 100, ','),
                cents % 100
            ),
            // VND has no minor unit in everyday use: round to whole units
            Currency::Vnd => format!("{}{} ₫", sign, group_thousands((cents + 50) / 100, '.')),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "VND" => Ok(Currency::Vnd),
            other => Err(ValidationError::InvalidFormat {
                field: "currency".to_string(),
                reason: format!("unknown currency '{}', expected USD or VND", other),
            }),
        }
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
