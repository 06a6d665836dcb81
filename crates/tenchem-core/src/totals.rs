//! # Totals Engine
//!
//! Pure mapping from an ordered list of line items to [`QuoteTotals`].
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  per line item                                                          │
//! │    gross     = round(quantity × unit_price)          (to the cent)      │
//! │    discount  = round_half_up(gross × bps / 10000)    (to the cent)      │
//! │    line      = gross − discount                                         │
//! │                                                                         │
//! │  aggregate                                                              │
//! │    subtotal        = Σ gross                                            │
//! │    total_discount  = Σ discount                                         │
//! │    grand_total     = subtotal − total_discount      (exact integers)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never cached: every call recomputes from the current list.
//! Out-of-range quantities and discounts are passed through unchanged.
//! Sums clamp at the `i64` bounds rather than overflow.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// Line Amounts
// =============================================================================

/// The three amounts derived from a single line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineAmounts {
    pub gross: Money,
    pub discount: Money,
    pub line_total: Money,
}

impl LineAmounts {
    /// Computes the amounts for one row.
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::{DiscountRate, LineAmounts, LineItem, Money};
    ///
    /// let mut item = LineItem::placeholder();
    /// item.unit_price = Money::from_cents(10_000);
    /// item.quantity = 3.0;
    /// item.discount = DiscountRate::from_percentage(10.0);
    ///
    /// let amounts = LineAmounts::of(&item);
    /// assert_eq!(amounts.gross.to_string(), "300.00");
    /// assert_eq!(amounts.discount.to_string(), "30.00");
    /// assert_eq!(amounts.line_total.to_string(), "270.00");
    /// ```
    pub fn of(item: &LineItem) -> Self {
        let gross = item.unit_price.scale(item.quantity);
        let discount = gross.discount_amount(item.discount);
        Self {
            gross,
            discount,
            line_total: gross.saturating_sub(discount),
        }
    }
}

// =============================================================================
// Quote Totals
// =============================================================================

/// Aggregate amounts for a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub subtotal: Money,
    pub total_discount: Money,
    pub grand_total: Money,
}

impl QuoteTotals {
    /// Computes totals from scratch. An empty list yields all zeros.
    pub fn compute(items: &[LineItem]) -> Self {
        let (subtotal, total_discount) = items
            .iter()
            .map(LineAmounts::of)
            .fold((Money::zero(), Money::zero()), |(sub, disc), line| {
                (sub.saturating_add(line.gross), disc.saturating_add(line.discount))
            });

        Self {
            subtotal,
            total_discount,
            grand_total: subtotal.saturating_sub(total_discount),
        }
    }

    /// Whether the totals block should print a discount line.
    #[inline]
    pub fn has_discount(&self) -> bool {
        !self.total_discount.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::DiscountRate;
    use proptest::prelude::*;

    fn item(quantity: f64, price_cents: i64, discount_pct: f64) -> LineItem {
        let mut item = LineItem::placeholder();
        item.product_id = Some("X".to_string());
        item.unit_price = Money::from_cents(price_cents);
        item.quantity = quantity;
        item.discount = DiscountRate::from_percentage(discount_pct);
        item
    }

    #[test]
    fn test_empty_list_is_zero() {
        let totals = QuoteTotals::compute(&[]);
        assert_eq!(totals, QuoteTotals::default());
        assert!(!totals.has_discount());
    }

    #[test]
    fn test_single_discounted_line() {
        let totals = QuoteTotals::compute(&[item(3.0, 10_000, 10.0)]);
        assert_eq!(totals.subtotal, Money::from_cents(30_000));
        assert_eq!(totals.total_discount, Money::from_cents(3_000));
        assert_eq!(totals.grand_total, Money::from_cents(27_000));
    }

    #[test]
    fn test_mixed_discounts() {
        let items = [item(1.0, 20_000, 0.0), item(1.0, 20_000, 50.0)];
        let totals = QuoteTotals::compute(&items);
        assert_eq!(totals.subtotal.to_string(), "400.00");
        assert_eq!(totals.total_discount.to_string(), "100.00");
        assert_eq!(totals.grand_total.to_string(), "300.00");
        assert!(totals.has_discount());
    }

    #[test]
    fn test_placeholder_rows_contribute_nothing() {
        let totals = QuoteTotals::compute(&[LineItem::placeholder(), item(2.0, 1_500, 0.0)]);
        assert_eq!(totals.subtotal, Money::from_cents(3_000));
        assert_eq!(totals.grand_total, Money::from_cents(3_000));
    }

    #[test]
    fn test_negative_quantity_passes_through() {
        let totals = QuoteTotals::compute(&[item(-2.0, 10_000, 10.0)]);
        assert_eq!(totals.subtotal.cents(), -20_000);
        assert_eq!(totals.total_discount.cents(), -2_000);
        assert_eq!(totals.grand_total.cents(), -18_000);
    }

    #[test]
    fn test_discount_over_hundred_passes_through() {
        let totals = QuoteTotals::compute(&[item(1.0, 10_000, 120.0)]);
        assert_eq!(totals.grand_total.cents(), -2_000);
    }

    #[test]
    fn test_fractional_quantity_rounds_per_line() {
        // 0.333 × 10.00 = 3.33
        let totals = QuoteTotals::compute(&[item(0.333, 1_000, 0.0), item(0.333, 1_000, 0.0)]);
        assert_eq!(totals.subtotal.cents(), 666);
    }

    #[test]
    fn test_huge_lines_clamp_instead_of_overflowing() {
        let items = [item(1.0, i64::MAX, 0.0), item(1.0, i64::MAX, 0.0)];
        let totals = QuoteTotals::compute(&items);
        assert_eq!(totals.subtotal.cents(), i64::MAX);
        assert_eq!(totals.grand_total.cents(), i64::MAX);

        let discounted = QuoteTotals::compute(&[item(2.0, i64::MAX, 150.0)]);
        assert!(discounted.total_discount.cents() > 0);
    }

    proptest! {
        #[test]
        fn prop_grand_total_is_exact_difference(
            lines in prop::collection::vec((0u32..10_000, 0i64..10_000_000, 0u32..=10_000), 0..20)
        ) {
            let items: Vec<LineItem> = lines
                .iter()
                .map(|&(qty_hundredths, price, bps)| {
                    let mut it = item(qty_hundredths as f64 / 100.0, price, 0.0);
                    it.discount = DiscountRate::from_bps(bps as i32);
                    it
                })
                .collect();

            let totals = QuoteTotals::compute(&items);
            prop_assert_eq!(totals.grand_total, totals.subtotal - totals.total_discount);
            prop_assert!(!totals.subtotal.is_negative());
            prop_assert!(!totals.total_discount.is_negative());
            prop_assert!(totals.total_discount <= totals.subtotal);
        }

        #[test]
        fn prop_totals_ignore_line_order(
            lines in prop::collection::vec((1u32..500, 0i64..1_000_000, 0u32..=10_000), 1..10)
        ) {
            let items: Vec<LineItem> = lines
                .iter()
                .map(|&(qty, price, bps)| {
                    let mut it = item(qty as f64, price, 0.0);
                    it.discount = DiscountRate::from_bps(bps as i32);
                    it
                })
                .collect();
            let mut reversed = items.clone();
            reversed.reverse();

            prop_assert_eq!(QuoteTotals::compute(&items), QuoteTotals::compute(&reversed));
        }
    }
}
