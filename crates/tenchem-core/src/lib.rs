//! # tenchem-core: Pure Business Logic for the TenChem Quotation Engine
//!
//! This crate is the **heart** of the quotation builder. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     TenChem Quote Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tenchem-cli (thin app)                       │   │
//! │  │    config ──► draft file ──► session messages ──► export        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tenchem-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │ totals  │ │ catalog │ │ session │  │   │
//! │  │   │ Product │ │  Money  │ │ Quote-  │ │  CRUD   │ │ Message │  │   │
//! │  │   │LineItem │ │Discount │ │ Totals  │ │ import  │ │  apply  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ QuoteDocument (plain data)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tenchem-render (Document Renderer)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, CustomerDetails, CompanyInfo)
//! - [`money`] - Money and DiscountRate with integer arithmetic
//! - [`totals`] - The Totals Engine
//! - [`catalog`] - Product catalog CRUD and search
//! - [`import`] - CSV catalog import
//! - [`session`] - Quote session state and update messages
//! - [`validation`] - Field validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tenchem_core::{DiscountRate, LineItem, Money, QuoteTotals};
//!
//! let mut item = LineItem::placeholder();
//! item.unit_price = Money::from_major_minor(100, 0);
//! item.quantity = 3.0;
//! item.discount = DiscountRate::from_percentage(10.0);
//!
//! let totals = QuoteTotals::compute(&[item]);
//! assert_eq!(totals.subtotal.to_string(), "300.00");
//! assert_eq!(totals.total_discount.to_string(), "30.00");
//! assert_eq!(totals.grand_total.to_string(), "270.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod import;
pub mod money;
pub mod session;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, NewProduct, PendingDeletion, ProductEdit};
pub use error::{CoreError, CoreResult, ImportError, ValidationError};
pub use import::{import_products, ImportReport};
pub use money::{DiscountRate, Money};
pub use session::{
    generate_quote_number, LineItemUpdate, QuoteSession, SessionMessage, SessionOutcome,
};
pub use totals::{LineAmounts, QuoteTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Payment terms (in days) pre-filled on a fresh customer form.
pub const DEFAULT_PAYMENT_TERMS_DAYS: u32 = 7;

/// Days a quotation stays valid after its issue date.
pub const DEFAULT_VALIDITY_DAYS: u32 = 7;

/// Display placeholder for a blank party name.
pub const UNKNOWN_PARTY: &str = "Unknown";

/// Display placeholder for a blank phone number.
pub const PHONE_NOT_PROVIDED: &str = "Not Provided";

/// Unit shown on a line item that has no product selected yet.
pub const PLACEHOLDER_UOM: &str = "-";
