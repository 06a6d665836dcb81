//! # Quote Session
//!
//! The single owner of everything a user edits while building a quote.
//!
//! ## Message Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         QuoteSession                                    │
//! │                                                                         │
//! │   caller ──► SessionMessage ──► apply() ──► validated mutation          │
//! │                                    │                                    │
//! │                  ┌─────────────────┼──────────────────┐                 │
//! │                  ▼                 ▼                  ▼                 │
//! │              catalog          line_items          customer              │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                        totals()  (recomputed every call)                │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                quote_document() ──► renderer                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tenchem_core::{LineItemUpdate, QuoteSession, SessionMessage, SessionOutcome};
//!
//! let mut session = QuoteSession::with_sample_catalog();
//! let SessionOutcome::LineItemAdded(row) = session.apply(SessionMessage::AddLineItem).unwrap()
//! else { unreachable!() };
//!
//! session
//!     .apply(SessionMessage::UpdateLineItem {
//!         id: row,
//!         update: LineItemUpdate::SelectProduct("NCA".into()),
//!     })
//!     .unwrap();
//! session
//!     .apply(SessionMessage::UpdateLineItem {
//!         id: row,
//!         update: LineItemUpdate::Quantity(3.0),
//!     })
//!     .unwrap();
//!
//! assert_eq!(session.totals().grand_total.to_string(), "300.00");
//! assert!(session.can_generate_quote());
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, NewProduct, PendingDeletion, ProductEdit};
use crate::error::{CoreError, CoreResult};
use crate::money::DiscountRate;
use crate::totals::QuoteTotals;
use crate::types::{CustomerDetails, LineItem, Product, QuoteDocument};
use crate::validation::{validate_discount_percent, validate_quantity};

// =============================================================================
// Messages
// =============================================================================

/// The closed set of editable line item fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum LineItemUpdate {
    /// Bind the row to a catalog product (snapshot of name, unit, price).
    SelectProduct(String),
    /// Return the row to its placeholder state.
    ClearProduct,
    /// Finite and not negative.
    Quantity(f64),
    /// Finite and within `0..=100`.
    DiscountPercent(f64),
}

/// Every state change a session accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMessage {
    AddLineItem,
    RemoveLineItem(Uuid),
    UpdateLineItem { id: Uuid, update: LineItemUpdate },
    SetCustomer(CustomerDetails),
    /// Swap in a freshly imported catalog.
    ReplaceCatalog(Vec<Product>),
    AddProduct(NewProduct),
    EditProduct { id: String, edit: ProductEdit },
    RequestDeleteProduct(String),
    ConfirmDeleteProduct(PendingDeletion),
}

/// What a successfully applied message produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Applied,
    LineItemAdded(Uuid),
    ProductAdded(String),
    /// Needs a `ConfirmDeleteProduct` to take effect.
    DeletePending(PendingDeletion),
    ProductDeleted(Product),
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    catalog: Catalog,
    line_items: Vec<LineItem>,
    customer: CustomerDetails,
}

impl QuoteSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            line_items: Vec::new(),
            customer: CustomerDetails::default(),
        }
    }

    pub fn with_sample_catalog() -> Self {
        Self::new(Catalog::sample())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// Always recomputed from the current rows.
    pub fn totals(&self) -> QuoteTotals {
        QuoteTotals::compute(&self.line_items)
    }

    /// Quote generation is disabled while the list is empty.
    pub fn can_generate_quote(&self) -> bool {
        !self.line_items.is_empty()
    }

    /// Applies one message. A failed message leaves the session unchanged.
    pub fn apply(&mut self, message: SessionMessage) -> CoreResult<SessionOutcome> {
        match message {
            SessionMessage::AddLineItem => {
                let item = LineItem::placeholder();
                let id = item.id;
                self.line_items.push(item);
                Ok(SessionOutcome::LineItemAdded(id))
            }
            SessionMessage::RemoveLineItem(id) => {
                let index = self.position(id)?;
                self.line_items.remove(index);
                Ok(SessionOutcome::Applied)
            }
            SessionMessage::UpdateLineItem { id, update } => {
                self.update_line_item(id, update)?;
                Ok(SessionOutcome::Applied)
            }
            SessionMessage::SetCustomer(customer) => {
                self.customer = customer;
                Ok(SessionOutcome::Applied)
            }
            SessionMessage::ReplaceCatalog(products) => {
                self.catalog.replace(products);
                Ok(SessionOutcome::Applied)
            }
            SessionMessage::AddProduct(new) => {
                let id = self.catalog.add(new)?;
                Ok(SessionOutcome::ProductAdded(id))
            }
            SessionMessage::EditProduct { id, edit } => {
                self.catalog.edit(&id, edit)?;
                Ok(SessionOutcome::Applied)
            }
            SessionMessage::RequestDeleteProduct(id) => {
                let pending = self.catalog.request_delete(&id)?;
                Ok(SessionOutcome::DeletePending(pending))
            }
            SessionMessage::ConfirmDeleteProduct(pending) => {
                let removed = self.catalog.confirm_delete(pending)?;
                Ok(SessionOutcome::ProductDeleted(removed))
            }
        }
    }

    fn position(&self, id: Uuid) -> CoreResult<usize> {
        self.line_items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))
    }

    fn update_line_item(&mut self, id: Uuid, update: LineItemUpdate) -> CoreResult<()> {
        let index = self.position(id)?;

        match update {
            LineItemUpdate::SelectProduct(product_id) => {
                let product = self
                    .catalog
                    .get(&product_id)
                    .ok_or(CoreError::ProductNotFound(product_id))?;
                self.line_items[index].select_product(product);
            }
            LineItemUpdate::ClearProduct => self.line_items[index].clear_product(),
            LineItemUpdate::Quantity(quantity) => {
                validate_quantity(quantity)?;
                self.line_items[index].quantity = quantity;
            }
            LineItemUpdate::DiscountPercent(percent) => {
                validate_discount_percent(percent)?;
                self.line_items[index].discount = DiscountRate::from_percentage(percent);
            }
        }
        Ok(())
    }

    /// Freezes the current state into a renderable quote.
    ///
    /// Fails with [`CoreError::EmptyQuote`] when there are no line items.
    pub fn quote_document(
        &self,
        quote_number: impl Into<String>,
        issue_date: NaiveDate,
    ) -> CoreResult<QuoteDocument> {
        if !self.can_generate_quote() {
            return Err(CoreError::EmptyQuote);
        }
        Ok(QuoteDocument {
            quote_number: quote_number.into(),
            issue_date,
            customer: self.customer.clone(),
            line_items: self.line_items.clone(),
            totals: self.totals(),
        })
    }
}

// =============================================================================
// Quote Numbers
// =============================================================================

/// Formats `QT-<year>-<NNNN>` with the four digits taken from `seed`.
///
/// ```rust
/// use tenchem_core::session::quote_number_from;
/// use uuid::Uuid;
///
/// let number = quote_number_from(2025, Uuid::nil());
/// assert_eq!(number, "QT-2025-1000");
/// ```
pub fn quote_number_from(year: i32, seed: Uuid) -> String {
    let digits = 1000 + (seed.as_u128() % 9000) as u32;
    format!("QT-{year}-{digits}")
}

/// A fresh quote number for the year of `issue_date`.
pub fn generate_quote_number(issue_date: NaiveDate) -> String {
    quote_number_from(issue_date.year(), Uuid::new_v4())
}
