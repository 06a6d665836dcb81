//! # Quote Drafts
//!
//! A draft is a small TOML file describing one quotation. It is replayed
//! into a [`QuoteSession`] through the same messages an interactive front
//! end would send, so every field goes through session validation.
//!
//! ```toml
//! [customer]
//! party_name = "Shree Ram Builders"
//! phone_number = "+91-98765 43210"
//! payment_terms_days = 15
//!
//! [[items]]
//! product_id = "NCA"
//! quantity = 3
//! discount_percent = 10
//!
//! [[items]]
//! product_id = "TG-1"
//! quantity = 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tenchem_core::{
    CoreResult, CustomerDetails, LineItemUpdate, QuoteSession, SessionMessage, SessionOutcome,
};
use tracing::debug;

use crate::error::{AppError, AppResult};

fn default_quantity() -> f64 {
    1.0
}

/// One `[[items]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftItem {
    pub product_id: String,

    #[serde(default = "default_quantity")]
    pub quantity: f64,

    #[serde(default)]
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteDraft {
    #[serde(default)]
    pub customer: CustomerDetails,

    #[serde(default)]
    pub items: Vec<DraftItem>,
}

impl QuoteDraft {
    pub fn from_toml(text: &str) -> AppResult<Self> {
        toml::from_str(text).map_err(|e| AppError::draft(format!("Invalid quote draft: {e}")))
    }

    pub fn read(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::from_toml(&text)
    }

    /// Replays the draft into `session`: customer first, then one line
    /// item per entry.
    pub fn apply(&self, session: &mut QuoteSession) -> CoreResult<()> {
        session.apply(SessionMessage::SetCustomer(self.customer.clone()))?;

        for item in &self.items {
            let SessionOutcome::LineItemAdded(id) = session.apply(SessionMessage::AddLineItem)?
            else {
                continue;
            };

            let updates = [
                LineItemUpdate::SelectProduct(item.product_id.clone()),
                LineItemUpdate::Quantity(item.quantity),
                LineItemUpdate::DiscountPercent(item.discount_percent),
            ];
            for update in updates {
                session.apply(SessionMessage::UpdateLineItem { id, update })?;
            }
            debug!(product = %item.product_id, quantity = item.quantity, "draft item applied");
        }
        Ok(())
    }
}
