//! # Error Types
//!
//! Domain-specific error types for tenchem-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tenchem-core errors (this file)                                       │
//! │  ├── CoreError        - Session / catalog failures                     │
//! │  ├── ValidationError  - Field-level input failures                     │
//! │  └── ImportError      - CSV catalog import failures                    │
//! │                                                                         │
//! │  tenchem-render errors (separate crate)                                │
//! │  └── RenderError      - PDF backend / file write failures              │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees (code + notice)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → printed notice         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing optional fields (blank party name, blank phone) are never
//! errors: they are replaced by display placeholders at render time.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Line item id is not in the quote.
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),

    /// Quote generation was requested with no line items.
    ///
    /// ## User Workflow
    /// ```text
    /// Empty quote ──► "Generate Quote PDF" ──► EmptyQuote
    ///                                          (button stays disabled)
    /// ```
    #[error("Quote has no line items")]
    EmptyQuote,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the session boundary before a value reaches a line item or
/// catalog entry.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Import Error
// =============================================================================

/// Catalog import failures.
///
/// Individual bad rows are not errors (they are counted and skipped); the
/// import only fails when the input cannot be read at all or when nothing
/// usable is left.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The delimited text could not be parsed.
    #[error("Error parsing CSV file: {0}")]
    Malformed(#[from] csv::Error),

    /// Every row was dropped.
    #[error("No valid products found in CSV ({skipped} rows skipped). Please check the format.")]
    NoValidProducts { skipped: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
