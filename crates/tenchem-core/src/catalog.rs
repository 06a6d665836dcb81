//! # Product Catalog
//!
//! Ordered product list with add / edit / two-step delete / search.
//!
//! ## Delete Confirmation Flow
//! ```text
//! request_delete("TRWL") ──► PendingDeletion { id, name }
//!                                   │
//!            caller shows "Delete Trowel (Notched)?"
//!                                   │
//!           ┌───────────────────────┴──────────────────────┐
//!           ▼ confirmed                                     ▼ cancelled
//!   confirm_delete(pending)                          drop(pending)
//!   product removed                                  nothing happens
//! ```
//!
//! Line items hold snapshots, so editing or deleting a product never
//! changes an existing quote.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_product_name, validate_unit_price, validate_uom};

// =============================================================================
// Requests
// =============================================================================

/// Fields for a product created by hand. The id is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub uom: String,
    #[serde(default)]
    pub unit_price: Money,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductEdit {
    pub name: Option<String>,
    pub uom: Option<String>,
    pub unit_price: Option<Money>,
}

/// A delete that has been requested but not yet confirmed.
#[must_use = "a pending deletion does nothing until confirmed"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    id: String,
    name: String,
}

impl PendingDeletion {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Product name, for the confirmation prompt.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in TenChem product range, every item listed at 100.00.
    pub fn sample() -> Self {
        const SAMPLE: &[(&str, &str, &str)] = &[
            ("NCA", "NCA SILVER - Polymer Modified Adhesive (20kg)", "Bag"),
            ("NSA", "NSA GOLD - Polymer Modified Adhesive (20kg)", "Bag"),
            ("EFA", "EFA PLATINUM - Extra Fix Adhesive (20kg)", "Bag"),
            ("VFA", "VFA DIAMOND - Vitro Fix Adhesive (20kg)", "Bag"),
            ("TG-1", "Tile Grout - Polymer Based (1kg)", "Bag"),
            ("EG-1", "Epoxy Grout - Resin Based (1kg Kit)", "Kit"),
            ("EG-5", "Epoxy Grout - Resin Based (5kg Kit)", "Kit"),
            ("TS-2", "Tile Spacer - 2mm (100 Pcs/Pkt)", "Pkt"),
            ("TS-3", "Tile Spacer - 3mm (100 Pcs/Pkt)", "Pkt"),
            ("TS-4", "Tile Spacer - 4mm (100 Pcs/Pkt)", "Pkt"),
            ("TE-KIT", "Tiles Equalizer (Levlar Kit) - 50 Clips/50 Wedges", "Kit"),
            ("TL-TOOL", "Tile Leveling Tool", "Pc"),
            ("TL-LIFT", "Tile Lifters (Suction Cup)", "Pc"),
            ("TRWL", "Trowel (Notched)", "Pc"),
        ];

        let list_price = Money::from_major_minor(100, 0);
        Self::new(
            SAMPLE
                .iter()
                .map(|(id, name, uom)| Product::new(*id, *name, *uom, list_price))
                .collect(),
        )
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replaces the whole list (used after a CSV import).
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Adds a product with a freshly generated id and returns that id.
    ///
    /// ## Rules
    /// - Name and UOM are required
    /// - Price must not be negative
    ///
    /// ## Example
    /// ```rust
    /// use tenchem_core::{Catalog, Money, NewProduct};
    ///
    /// let mut catalog = Catalog::default();
    /// let id = catalog
    ///     .add(NewProduct {
    ///         name: "Epoxy Grout".into(),
    ///         uom: "Kit".into(),
    ///         unit_price: Money::from_cents(45_000),
    ///     })
    ///     .unwrap();
    /// assert_eq!(catalog.get(&id).unwrap().uom, "Kit");
    /// ```
    pub fn add(&mut self, new: NewProduct) -> CoreResult<String> {
        let name = validate_product_name(&new.name)?;
        let uom = validate_uom(&new.uom)?;
        validate_unit_price(new.unit_price)?;

        let id = Uuid::new_v4().to_string();
        self.products
            .push(Product::new(id.clone(), name, uom, new.unit_price));
        Ok(id)
    }

    /// Applies a partial edit. The name may change but never become blank.
    pub fn edit(&mut self, id: &str, edit: ProductEdit) -> CoreResult<()> {
        let name = edit.name.as_deref().map(validate_product_name).transpose()?;
        let uom = edit.uom.as_deref().map(validate_uom).transpose()?;
        if let Some(price) = edit.unit_price {
            validate_unit_price(price)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        if let Some(name) = name {
            product.name = name;
        }
        if let Some(uom) = uom {
            product.uom = uom;
        }
        if let Some(price) = edit.unit_price {
            product.unit_price = price;
        }
        Ok(())
    }

    /// First step of a delete: checks the product exists.
    pub fn request_delete(&self, id: &str) -> CoreResult<PendingDeletion> {
        let product = self
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(PendingDeletion {
            id: product.id.clone(),
            name: product.name.clone(),
        })
    }

    /// Second step of a delete: removes the product and returns it.
    pub fn confirm_delete(&mut self, pending: PendingDeletion) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == pending.id)
            .ok_or(CoreError::ProductNotFound(pending.id))?;
        Ok(self.products.remove(index))
    }

    /// Case-insensitive substring search over name and id.
    ///
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle) || p.id.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 14);
        assert!(catalog
            .products()
            .iter()
            .all(|p| p.unit_price == Money::from_cents(10_000)));
        assert_eq!(catalog.get("TRWL").unwrap().uom, "Pc");
    }

    #[test]
    fn test_add_requires_name_and_uom() {
        let mut catalog = Catalog::default();
        let err = catalog
            .add(NewProduct {
                name: "Grout".to_string(),
                uom: " ".to_string(),
                unit_price: Money::zero(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { ref field }) if field == "uom"
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut catalog = Catalog::default();
        let result = catalog.add(NewProduct {
            name: "Grout".to_string(),
            uom: "Kg".to_string(),
            unit_price: Money::from_cents(-100),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut catalog = Catalog::default();
        let new = NewProduct {
            name: "Spacer".to_string(),
            uom: "Pkt".to_string(),
            unit_price: Money::zero(),
        };
        let a = catalog.add(new.clone()).unwrap();
        let b = catalog.add(new).unwrap();
        assert_ne!(a, b);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_edit_updates_fields() {
        let mut catalog = Catalog::sample();
        catalog
            .edit(
                "NCA",
                ProductEdit {
                    unit_price: Some(Money::from_cents(42_000)),
                    ..Default::default()
                },
            )
            .unwrap();
        let nca = catalog.get("NCA").unwrap();
        assert_eq!(nca.unit_price, Money::from_cents(42_000));
        assert!(nca.name.starts_with("NCA SILVER"));
    }

    #[test]
    fn test_edit_rejects_blank_name() {
        let mut catalog = Catalog::sample();
        let result = catalog.edit(
            "NCA",
            ProductEdit {
                name: Some(String::new()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert!(catalog.get("NCA").unwrap().name.starts_with("NCA"));
    }

    #[test]
    fn test_edit_unknown_product() {
        let mut catalog = Catalog::sample();
        let result = catalog.edit("NOPE", ProductEdit::default());
        assert!(matches!(result, Err(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_two_step_delete() {
        let mut catalog = Catalog::sample();
        let pending = catalog.request_delete("TRWL").unwrap();
        assert_eq!(pending.name(), "Trowel (Notched)");
        assert_eq!(catalog.len(), 14);

        let removed = catalog.confirm_delete(pending).unwrap();
        assert_eq!(removed.id, "TRWL");
        assert!(catalog.get("TRWL").is_none());
    }

    #[test]
    fn test_cancelled_delete_keeps_product() {
        let catalog = Catalog::sample();
        let _pending = catalog.request_delete("TRWL").unwrap();
        assert!(catalog.get("TRWL").is_some());
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.search("epoxy").len(), 2);
        assert_eq!(catalog.search("ts-").len(), 3);
        assert_eq!(catalog.search("").len(), 14);
        assert!(catalog.search("cement").is_empty());
    }
}
