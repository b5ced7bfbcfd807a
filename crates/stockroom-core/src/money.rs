//! # Money Module
//!
//! Provides the `Money` type used for product prices and sale totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are entered in rupees and summed into revenue figures.          │
//! │                                                                         │
//! │  With floats:   0.1 + 0.2 = 0.30000000000000004                         │
//! │  With paise:    10 + 20   = 30                                          │
//! │                                                                         │
//! │  Every amount is stored in the minor unit (1 rupee = 100 paise).        │
//! │  Only Display converts back to "₹69000.00".                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_major(21_000);
//! let total = price * 2;
//! assert_eq!(total.major(), 42_000);
//! assert_eq!(total.to_string(), "₹42000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// Number of minor units in one major unit.
const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount in the smallest currency unit (paise).
///
/// Serializes as a bare integer so the front end sees `"price": 6900000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1099).minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the amount in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit remainder, always 0-99.
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price × quantity, or `None` when the total does not fit.
    ///
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(250).checked_mul(4), Some(Money::from_minor(1000)));
    /// assert_eq!(Money::from_minor(i64::MAX).checked_mul(2), None);
    /// ```
    #[inline]
    pub fn checked_mul(self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }

    /// Addition clamped at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.minor_part())
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Unit price × quantity.
///
/// Callers holding unchecked input use [`Money::checked_mul`].
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * i64::from(qty))
    }
}

/// Revenue totals clamp at `i64::MAX` instead of wrapping.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let price = Money::from_major(69_000);
        assert_eq!(price.minor(), 6_900_000);
        assert_eq!(price.major(), 69_000);
        assert_eq!(price.minor_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1099).to_string(), "₹10.99");
        assert_eq!(Money::from_major(21_000).to_string(), "₹21000.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3).minor(), 3000);

        let mut acc = Money::zero();
        acc += a;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_major(1), Money::from_major(2), Money::from_minor(50)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref.minor(), 350);
        assert_eq!(by_ref, by_value);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_mul_detects_overflow() {
        let price = Money::from_minor(5_000_000_000_000_000_000);
        assert_eq!(price.checked_mul(1), Some(price));
        assert_eq!(price.checked_mul(2), None);
        assert_eq!(Money::from_major(69_000).checked_mul(2), Some(Money::from_major(138_000)));
    }

    #[test]
    fn test_sum_saturates() {
        let big = Money::from_minor(i64::MAX - 10);
        let total: Money = [big, Money::from_minor(100)].into_iter().sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_minor(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("250").unwrap();
        assert_eq!(back.minor(), 250);
    }
}
