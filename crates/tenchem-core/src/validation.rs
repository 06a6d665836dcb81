//! # Validation Module
//!
//! Field rules applied at the session boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input parsing (draft TOML / CSV)                             │
//! │  ├── Type checks (deserialization)                                     │
//! │  └── Unparseable CSV rows are dropped, not errors                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session messages                                             │
//! │  └── THIS MODULE: quantity, discount, product fields                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Totals Engine                                                │
//! │  └── No checks at all; passes values through                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest accepted unit of measure.
pub const MAX_UOM_LEN: usize = 20;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use tenchem_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Trowel (Notched) ").unwrap(), "Trowel (Notched)");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    required_text("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates a unit of measure and returns it trimmed.
pub fn validate_uom(uom: &str) -> ValidationResult<String> {
    required_text("uom", uom, MAX_UOM_LEN)
}

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be a finite number
/// - Must not be negative (zero is allowed while a row is being edited)
///
/// ## Example
/// ```rust
/// use tenchem_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2.5).is_ok());
/// assert!(validate_quantity(0.0).is_ok());
/// assert!(validate_quantity(-1.0).is_err());
/// assert!(validate_quantity(f64::NAN).is_err());
/// ```
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "quantity".to_string(),
        });
    }

    if quantity < 0.0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be a finite number in `0..=100`
pub fn validate_discount_percent(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates a catalog unit price. Zero is allowed.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Tile Lifters (Suction Cup)").is_ok());
        assert_eq!(
            validate_product_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(matches!(
            validate_product_name(&"A".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn test_validate_uom() {
        assert_eq!(validate_uom(" Bag ").unwrap(), "Bag");
        assert!(validate_uom("").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(1000.75).is_ok());
        assert!(matches!(
            validate_quantity(-0.5),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_quantity(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0.0).is_ok());
        assert!(validate_discount_percent(100.0).is_ok());
        assert!(validate_discount_percent(12.5).is_ok());
        assert!(matches!(
            validate_discount_percent(100.01),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_discount_percent(-1.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_discount_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
    }
}
