//! Right-aligned totals block under the quote table.
//!
//! ```text
//!                         Subtotal:            300.00
//!                         Discount:            -30.00    (only if non-zero)
//!                    ───────────────────────────────────  accent rule
//!                         TOTAL:               270.00    14 pt bold accent
//! ```

use tenchem_core::QuoteTotals;

use crate::canvas::{Page, Stroke, TextAlign, TextRun};
use crate::style::{BRAND_ORANGE, TEXT_BODY};

const LABEL_SIZE: f32 = 10.0;
const TOTAL_SIZE: f32 = 14.0;
const BLOCK_WIDTH: f32 = 70.0;
const DISCOUNT_STEP: f32 = 6.0;
const RULE_GAP: f32 = 4.0;
const TOTAL_GAP: f32 = 8.0;
/// Room below the last baseline for descenders.
const DESCENT: f32 = 2.0;

/// Horizontal placement of the block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsBlock {
    /// X of the labels.
    pub label_x: f32,
    /// Right edge of the values.
    pub value_x: f32,
    /// Right end of the accent rule.
    pub rule_end: f32,
}

impl TotalsBlock {
    /// Placement against the right margin of a page `page_width` wide.
    pub fn for_page(page_width: f32, margin: f32) -> Self {
        Self {
            label_x: page_width - margin - 5.0 - BLOCK_WIDTH,
            value_x: page_width - margin - 8.0,
            rule_end: page_width - margin - 5.0,
        }
    }

    /// Distance from the first baseline to the bottom of the block.
    pub fn height(totals: &QuoteTotals) -> f32 {
        let discount = if totals.has_discount() { DISCOUNT_STEP } else { 0.0 };
        discount + RULE_GAP + TOTAL_GAP + DESCENT
    }

    /// Draws the block with the subtotal baseline at `y` and returns the
    /// baseline of the grand total line.
    pub fn draw(&self, page: &mut Page, y: f32, totals: &QuoteTotals) -> f32 {
        let mut y = y;
        self.pair(page, "Subtotal:", totals.subtotal.to_string(), y);

        if totals.has_discount() {
            y += DISCOUNT_STEP;
            self.pair(page, "Discount:", format!("-{}", totals.total_discount), y);
        }

        y += RULE_GAP;
        page.line(
            (self.label_x - 5.0, y),
            (self.rule_end, y),
            Stroke::new(BRAND_ORANGE, 0.5),
        );

        y += TOTAL_GAP;
        page.text(
            TextRun::new("TOTAL:", self.label_x, y, TOTAL_SIZE)
                .bold()
                .color(BRAND_ORANGE),
        );
        page.text(
            TextRun::new(totals.grand_total.to_string(), self.value_x, y, TOTAL_SIZE)
                .bold()
                .color(BRAND_ORANGE)
                .align(TextAlign::Right),
        );
        y
    }

    fn pair(&self, page: &mut Page, label: &str, value: String, y: f32) {
        page.text(TextRun::new(label, self.label_x, y, LABEL_SIZE).color(TEXT_BODY));
        page.text(
            TextRun::new(value, self.value_x, y, LABEL_SIZE)
                .color(TEXT_BODY)
                .align(TextAlign::Right),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PageSize;
    use tenchem_core::Money;

    fn totals(subtotal: i64, discount: i64) -> QuoteTotals {
        QuoteTotals {
            subtotal: Money::from_cents(subtotal),
            total_discount: Money::from_cents(discount),
            grand_total: Money::from_cents(subtotal - discount),
        }
    }

    #[test]
    fn test_discount_line_present_when_nonzero() {
        let mut page = Page::new(PageSize::A4);
        let block = TotalsBlock::for_page(210.0, 15.0);
        let last = block.draw(&mut page, 100.0, &totals(30_000, 3_000));

        assert!(page.contains_text("Discount:"));
        assert!(page.contains_text("-30.00"));
        assert_eq!(page.find_text("270.00").map(|r| r.y), Some(last));
        assert_eq!(last, 118.0);
    }

    #[test]
    fn test_discount_line_omitted_when_zero() {
        let mut page = Page::new(PageSize::A4);
        let block = TotalsBlock::for_page(210.0, 15.0);
        let last = block.draw(&mut page, 100.0, &totals(30_000, 0));

        assert!(!page.contains_text("Discount:"));
        assert!(page.contains_text("Subtotal:"));
        assert_eq!(last, 112.0);
    }

    #[test]
    fn test_placement_and_height() {
        let block = TotalsBlock::for_page(210.0, 15.0);
        assert_eq!(block.label_x, 120.0);
        assert_eq!(block.value_x, 187.0);
        assert_eq!(TotalsBlock::height(&totals(100, 0)), 14.0);
        assert_eq!(TotalsBlock::height(&totals(100, 10)), 20.0);
    }
}
