//! # Money Module
//!
//! Provides the `Money` type for card values, container prices and the
//! collector's ledger.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A binder of twenty $0.10 commons must sell for exactly $2.00.         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every value is a count of cents. Multipliers are basis points and   │
//! │    the only rounding step is an explicit half-up to the nearest cent.  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cardvault_core::money::{Money, Rate};
//!
//! let base = Money::from_cents(1000);            // $10.00
//! let alt_art = base.scale(Rate::from_bps(30_000)); // ×3.00
//! assert_eq!(alt_art.cents(), 3000);
//!
//! let fee = Money::from_cents(4000).scale(Rate::HANDLING_FEE); // ×1.10
//! assert_eq!(fee, Money::from_major_minor(44, 0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Rate
// =============================================================================

/// A multiplicative rate in basis points.
///
/// 1 basis point = 0.01%, so `10_000` is ×1.00 and `15_000` is ×1.50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// ×1.00
    pub const IDENTITY: Rate = Rate(10_000);

    /// ×1.10, the handling fee charged on rare and luxury binders.
    pub const HANDLING_FEE: Rate = Rate(11_000);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::IDENTITY
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: differences between two values (trade quotes) can be
///   negative even though stored values and the ledger never are
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Ord + Hash**: card values take part in card identity
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  base price ──► valuation (×variant) ──► Card.value                     │
/// │                                              │                          │
/// │                                              ├──► sell_card ──► ledger  │
/// │                                              │                          │
/// │                          container price ◄───┘ (sum, ×1.10 fee)         │
/// │                                │                                        │
/// │                                └──► sell_binder / sell_deck ──► ledger  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use cardvault_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies by a rate and rounds half-up to the nearest cent.
    ///
    /// Half-up here means half away from zero, so a negative amount rounds
    /// symmetrically to its positive counterpart. Returns `None` when the
    /// result does not fit in an `i64`.
    ///
    /// ## Implementation
    /// Integer math in i128: `(|cents| * bps + 5000) / 10000`, sign restored
    /// afterwards. The +5000 is the half-cent.
    ///
    /// ## Example
    /// ```rust
    /// use cardvault_core::money::{Money, Rate};
    ///
    /// // 1 cent × 1.5 = 1.5 cents → 2 cents
    /// let scaled = Money::from_cents(1).checked_scale(Rate::from_bps(15_000));
    /// assert_eq!(scaled, Some(Money::from_cents(2)));
    ///
    /// assert_eq!(Money::from_cents(i64::MAX).checked_scale(Rate::from_bps(30_000)), None);
    /// ```
    pub fn checked_scale(&self, rate: Rate) -> Option<Money> {
        let magnitude = (self.0.unsigned_abs() as i128 * rate.bps() as i128 + 5000) / 10_000;
        let signed = if self.0 < 0 { -magnitude } else { magnitude };
        i64::try_from(signed).ok().map(Money)
    }

    /// Like [`Money::checked_scale`], clamped to the `i64` range on
    /// overflow.
    ///
    /// ## Example
    /// ```rust
    /// use cardvault_core::money::{Money, Rate};
    ///
    /// // $30.01 × 1.10 = $33.011 → $33.01
    /// assert_eq!(Money::from_cents(3001).scale(Rate::HANDLING_FEE).cents(), 3301);
    /// assert_eq!(Money::from_cents(i64::MAX).scale(Rate::HANDLING_FEE).cents(), i64::MAX);
    /// ```
    pub fn scale(&self, rate: Rate) -> Money {
        self.checked_scale(rate).unwrap_or(if self.0 < 0 {
            Money(i64::MIN)
        } else {
            Money(i64::MAX)
        })
    }

    /// Adds, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds, clamping to the `i64` range.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`.
///
/// ## Note
/// This is for debugging and logs. Rendering for people belongs to the
/// presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Sums saturate instead of overflowing.
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

/// Parses a decimal amount such as `"10"`, `"10.5"`, `"$10.99"` or `"-3.25"`.
///
/// Digits past the second decimal place are rounded half-up.
///
/// ## Example
/// ```rust
/// use cardvault_core::money::Money;
///
/// assert_eq!("10.99".parse::<Money>().unwrap().cents(), 1099);
/// assert_eq!("0.005".parse::<Money>().unwrap().cents(), 1);
/// assert!("ten".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a decimal amount", s.trim()),
        };

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(invalid)?
        };

        let digits: Vec<i64> = fraction
            .bytes()
            .map(|b| (b - b'0') as i64)
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).map_or(false, |d| *d >= 5);

        let cents = whole_cents
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))
            .ok_or_else(invalid)?;

        Ok(if negative { Money(-cents) } else { Money(cents) })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 2000);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_scale_rounds_half_up() {
        // 0.5 cent boundaries round away from zero
        assert_eq!(Money::from_cents(1).scale(Rate::from_bps(15_000)).cents(), 2);
        assert_eq!(Money::from_cents(3).scale(Rate::from_bps(15_000)).cents(), 5);
        assert_eq!(Money::from_cents(-1).scale(Rate::from_bps(15_000)).cents(), -2);

        // Below the half-cent rounds down
        assert_eq!(Money::from_cents(3001).scale(Rate::HANDLING_FEE).cents(), 3301);
        // $0.05 × 1.10 = 5.5 cents → 6
        assert_eq!(Money::from_cents(5).scale(Rate::HANDLING_FEE).cents(), 6);
    }

    #[test]
    fn test_scale_identity() {
        let value = Money::from_cents(12_345);
        assert_eq!(value.scale(Rate::IDENTITY), value);
        assert_eq!(Rate::default(), Rate::IDENTITY);
    }

    #[test]
    fn test_scale_overflow() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(huge.checked_scale(Rate::from_bps(30_000)), None);
        assert_eq!(huge.scale(Rate::from_bps(30_000)).cents(), i64::MAX);
        assert_eq!(Money::from_cents(-(i64::MAX / 2)).scale(Rate::from_bps(30_000)).cents(), i64::MIN);
        assert_eq!(huge.checked_scale(Rate::IDENTITY), Some(huge));
    }

    #[test]
    fn test_checked_add_and_saturating_sum() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );

        let total: Money = [max, max].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_parse() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("$10.99".parse::<Money>().unwrap().cents(), 1099);
        assert_eq!(".25".parse::<Money>().unwrap().cents(), 25);
        assert_eq!("-3.25".parse::<Money>().unwrap().cents(), -325);
        assert_eq!("1.005".parse::<Money>().unwrap().cents(), 101);
        assert_eq!("1.004".parse::<Money>().unwrap().cents(), 100);
        assert_eq!(" 7.10 ".parse::<Money>().unwrap().cents(), 710);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("1,50".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::from_cents(-250).abs().cents(), 250);
    }
}
