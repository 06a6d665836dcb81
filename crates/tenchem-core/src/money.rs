//! # Money Module
//!
//! Provides the `Money` and `DiscountRate` types for quotation arithmetic.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float line totals:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ drift in the grand total         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Every line amount is rounded to a whole paisa exactly once.         │
//! │    Sums and differences are then exact:                                │
//! │      grand_total == subtotal - total_discount   (always)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tenchem_core::money::{DiscountRate, Money};
//!
//! let price = Money::from_cents(10_000); // 100.00
//! let gross = price.scale(3.0);          // 300.00
//! let off = gross.discount_amount(DiscountRate::from_percentage(10.0));
//! assert_eq!(off.to_string(), "30.00");
//! assert_eq!((gross - off).to_string(), "270.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative quantities are passed through, so line
///   amounts can legitimately be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Product.unit_price ──► LineItem.unit_price (snapshot)
///                               │
///                               ▼
///                 gross ─► discount ─► line total
///                               │
///                               ▼
///        QuoteTotals { subtotal, total_discount, grand_total }
///                               │
///                               ▼
///                 "270.00" in the quote PDF
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal string such as `"149.5"` or `" 100 "`.
    ///
    /// The value is rounded to the nearest cent. Returns `None` for text
    /// that is not a finite number or whose magnitude exceeds
    /// [`Money::PARSE_LIMIT_CENTS`].
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("149.5"), Some(Money::from_cents(14950)));
    /// assert_eq!(Money::parse_decimal("0.125"), Some(Money::from_cents(13)));
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// assert_eq!(Money::parse_decimal(""), None);
    /// assert_eq!(Money::parse_decimal("1e30"), None);
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let value: f64 = text.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > Self::PARSE_LIMIT_CENTS as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Largest magnitude accepted by [`Money::parse_decimal`]
    /// (₹10 trillion).
    pub const PARSE_LIMIT_CENTS: i64 = 1_000_000_000_000_000;

    /// Addition that clamps at the `i64` bounds instead of overflowing.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtraction that clamps at the `i64` bounds instead of overflowing.
    #[inline]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies by a fractional quantity and rounds to the nearest cent.
    ///
    /// Halves round away from zero. Non-finite quantities yield zero.
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.scale(3.0).cents(), 897);
    /// assert_eq!(unit_price.scale(2.5).cents(), 748); // 747.5 → 748
    /// ```
    pub fn scale(&self, quantity: f64) -> Money {
        if !quantity.is_finite() {
            return Money::zero();
        }
        Money((self.0 as f64 * quantity).round() as i64)
    }

    /// Calculates the discount amount for a rate, rounded half up at the cent.
    ///
    /// ## Implementation
    /// Integer math on the magnitude: `(|amount| * bps + 5000) / 10000`,
    /// with the sign restored afterwards so that rounding is symmetric.
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::money::{DiscountRate, Money};
    ///
    /// let gross = Money::from_cents(1000);
    /// let off = gross.discount_amount(DiscountRate::from_bps(825));
    /// // 10.00 × 8.25% = 0.825 → 0.83
    /// assert_eq!(off.cents(), 83);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        let magnitude = self.0.unsigned_abs() as i128 * rate.bps().unsigned_abs() as i128;
        let rounded = i64::try_from((magnitude + 5000) / 10000).unwrap_or(i64::MAX);
        let negative = (self.0 < 0) != (rate.bps() < 0);
        Money(if negative { -rounded } else { rounded })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows two decimals and no currency symbol, as printed in the
/// document tables (`270.00`, `-30.00`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Per-line discount in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01%, so `1250` = 12.5%. The rate is signed and
/// unbounded: range checks belong to the session, the arithmetic passes
/// whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(i32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: i32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage, rounded to the nearest basis point.
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::money::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(12.5).bps(), 1250);
    /// assert_eq!(DiscountRate::from_percentage(-5.0).bps(), -500);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as i32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> i32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
