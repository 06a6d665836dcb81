//! # Documents
//!
//! One layout function per printable document. Each returns a
//! [`DocumentLayout`](crate::output::DocumentLayout): the display list
//! plus the title and file name the PDF is saved under.
//!
//! ```text
//! ┌──────────────┬───────────┬───────────────┬───────────────────────────────┐
//! │ Document     │ Page      │ Pages         │ File                          │
//! ├──────────────┼───────────┼───────────────┼───────────────────────────────┤
//! │ Quotation    │ A4        │ 1..n (table)  │ Quote_<no>_<party>.pdf        │
//! │ Catalog      │ A4        │ 1..n (table)  │ <prefix>_Product_Catalog.pdf  │
//! │ Brochure     │ A4        │ 3..n          │ <prefix>_Company_Catalog.pdf  │
//! │ Business card│ 89 × 51   │ 1             │ <prefix>_Business_Card.pdf    │
//! └──────────────┴───────────┴───────────────┴───────────────────────────────┘
//! ```

pub mod brochure;
pub mod card;
pub mod catalog;
pub mod quote;

pub use brochure::layout_brochure;
pub use card::layout_business_card;
pub use catalog::layout_catalog;
pub use quote::layout_quote;

use chrono::NaiveDate;

/// Date format printed on quotes and catalogs.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2025");
    }
}
