//! # Domain Types
//!
//! Core domain types used throughout the quotation engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │ CustomerDetails │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (business)  │──►│  id (UUID)      │   │  party_name     │       │
//! │  │  name           │   │  product_id     │   │  phone_number   │       │
//! │  │  uom            │   │  snapshot:      │   │  payment_terms  │       │
//! │  │  unit_price     │   │   name/uom/price│   └─────────────────┘       │
//! │  └─────────────────┘   │  quantity (f64) │                              │
//! │                        │  discount (bps) │   ┌─────────────────┐       │
//! │                        └─────────────────┘   │  CompanyInfo    │       │
//! │                                              │  (config)       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line item copies the product's name, unit and price at selection
//! time. Editing the catalog afterwards never reaches back into a quote.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{DiscountRate, Money};
use crate::totals::{LineAmounts, QuoteTotals};
use crate::{DEFAULT_PAYMENT_TERMS_DAYS, PHONE_NOT_PROVIDED, PLACEHOLDER_UOM, UNKNOWN_PARTY};

// =============================================================================
// Product
// =============================================================================

/// A catalog product that can be quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable business identifier (e.g. `NCA`, `TS-2`).
    pub id: String,

    /// Display name shown in tables.
    pub name: String,

    /// Unit of measure (Bag, Kit, Pc, Pkt).
    pub uom: String,

    /// List price per unit. Never negative.
    pub unit_price: Money,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        uom: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            uom: uom.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a quotation.
///
/// ## Lifecycle
/// ```text
/// AddLineItem ──► placeholder { product_id: None, uom: "-", price: 0 }
///                      │
///                      ▼ SelectProduct("NCA")
///               snapshot { product_id: Some("NCA"), name, uom, price }
///                      │
///                      ▼ Quantity / DiscountPercent
///               totals recomputed from scratch
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row identity for reconciliation (not a business key).
    pub id: Uuid,

    /// Selected product, `None` while the row is a placeholder.
    pub product_id: Option<String>,

    /// Name captured at selection time.
    pub product_name: String,

    /// Unit captured at selection time.
    pub uom: String,

    /// Price captured at selection time.
    pub unit_price: Money,

    pub quantity: f64,

    pub discount: DiscountRate,
}

impl LineItem {
    /// Creates an empty row pending product selection.
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::LineItem;
    ///
    /// let row = LineItem::placeholder();
    /// assert!(row.is_placeholder());
    /// assert_eq!(row.uom, "-");
    /// assert!(row.unit_price.is_zero());
    /// assert_eq!(row.quantity, 1.0);
    /// ```
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: None,
            product_name: String::new(),
            uom: PLACEHOLDER_UOM.to_string(),
            unit_price: Money::zero(),
            quantity: 1.0,
            discount: DiscountRate::zero(),
        }
    }

    /// Creates a row already bound to a product.
    pub fn from_product(product: &Product, quantity: f64) -> Self {
        let mut item = Self::placeholder();
        item.select_product(product);
        item.quantity = quantity;
        item
    }

    /// Copies the product's current name, unit and price into this row.
    pub fn select_product(&mut self, product: &Product) {
        self.product_id = Some(product.id.clone());
        self.product_name = product.name.clone();
        self.uom = product.uom.clone();
        self.unit_price = product.unit_price;
    }

    /// Returns the row to its placeholder state, keeping quantity and discount.
    pub fn clear_product(&mut self) {
        self.product_id = None;
        self.product_name.clear();
        self.uom = PLACEHOLDER_UOM.to_string();
        self.unit_price = Money::zero();
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.product_id.is_none()
    }

    /// Gross, discount and net amounts for this row.
    pub fn amounts(&self) -> LineAmounts {
        LineAmounts::of(self)
    }

    /// `quantity × unit_price × (1 − discount%)`, rounded per line.
    pub fn line_total(&self) -> Money {
        self.amounts().line_total
    }

    /// Quantity as typed, without a trailing `.0` (`3`, `2.5`).
    pub fn quantity_display(&self) -> String {
        format!("{}", self.quantity)
    }

    /// Table cell text for the "Qty / UOM" column.
    ///
    /// ```rust
    /// use tenchem_core::LineItem;
    ///
    /// let mut row = LineItem::placeholder();
    /// row.quantity = 2.5;
    /// row.uom = "Bag".into();
    /// assert_eq!(row.quantity_with_uom(), "2.5 Bag");
    /// ```
    pub fn quantity_with_uom(&self) -> String {
        format!("{} {}", self.quantity_display(), self.uom)
    }
}

// =============================================================================
// Customer Details
// =============================================================================

fn default_payment_terms() -> u32 {
    DEFAULT_PAYMENT_TERMS_DAYS
}

/// Who the quotation is addressed to.
///
/// Blank fields are valid; they are substituted at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub party_name: String,

    #[serde(default)]
    pub phone_number: String,

    #[serde(default = "default_payment_terms")]
    pub payment_terms_days: u32,
}

impl CustomerDetails {
    /// Party name for display, `"Unknown"` when blank.
    pub fn display_party_name(&self) -> &str {
        non_blank_or(&self.party_name, UNKNOWN_PARTY)
    }

    /// Phone for display, `"Not Provided"` when blank.
    pub fn display_phone(&self) -> &str {
        non_blank_or(&self.phone_number, PHONE_NOT_PROVIDED)
    }
}

impl Default for CustomerDetails {
    fn default() -> Self {
        Self {
            party_name: String::new(),
            phone_number: String::new(),
            payment_terms_days: DEFAULT_PAYMENT_TERMS_DAYS,
        }
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

// =============================================================================
// Company Info
// =============================================================================

/// Identity of the issuing business. Configuration, not session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// GST registration number.
    pub tax_id: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "TenChem India".to_string(),
            address: "At. Surendranagar, Gujarat, INDIA".to_string(),
            phone: "+91-95587 35135".to_string(),
            email: "tenchemindia@gmail.com".to_string(),
            tax_id: "24ABCDE1234F1Z5".to_string(),
        }
    }
}

// =============================================================================
// Quote Document
// =============================================================================

/// Everything the renderer needs to lay out a quotation.
///
/// Built by [`crate::QuoteSession::quote_document`], which guarantees at
/// least one line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteDocument {
    pub quote_number: String,
    pub issue_date: NaiveDate,
    pub customer: CustomerDetails,
    pub line_items: Vec<LineItem>,
    pub totals: QuoteTotals,
}
