//! # App Error Type
//!
//! Every lower-level error is mapped to an [`AppError`] carrying a
//! machine-readable code and the notice shown to the user.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in tenchem                              │
//! │                                                                         │
//! │  ConfigError ──────┐                                                    │
//! │  DraftError ───────┤                                                    │
//! │  CoreError ────────┼──► AppError { code, message } ──► main()           │
//! │  ImportError ──────┤                                      │             │
//! │  RenderError ──────┘                     eprintln!("error: msg")        │
//! │                                          exit code != 0                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tenchem_core::{CoreError, ImportError};
use tenchem_render::RenderError;
use thiserror::Error;

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// App Error
// =============================================================================

/// Error surfaced at the process boundary.
#[derive(Debug, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Referenced product or line item does not exist.
    NotFound,

    /// A field failed validation.
    ValidationError,

    /// The quote has no line items.
    EmptyQuote,

    /// Catalog file unreadable or without a single valid product.
    ImportError,

    /// Config file missing, malformed or out of range.
    ConfigError,

    /// Quote draft file malformed.
    DraftError,

    /// PDF generation failed.
    RenderError,

    /// Filesystem failure outside rendering.
    IoError,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    pub fn draft(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::DraftError, message)
    }

    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        AppError::new(
            ErrorCode::IoError,
            format!("Failed to read {}: {err}", path.display()),
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            ErrorCode::NotFound | ErrorCode::ValidationError | ErrorCode::EmptyQuote => 2,
            ErrorCode::ImportError | ErrorCode::DraftError | ErrorCode::ConfigError => 3,
            ErrorCode::RenderError | ErrorCode::IoError => 1,
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => AppError::not_found("Product", &id),
            CoreError::LineItemNotFound(id) => AppError::not_found("Line item", &id),
            CoreError::EmptyQuote => AppError::new(
                ErrorCode::EmptyQuote,
                "Please add at least one item to generate a quote.",
            ),
            CoreError::Validation(e) => AppError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::NoValidProducts { skipped } => AppError::new(
                ErrorCode::ImportError,
                format!(
                    "No valid products found in file ({skipped} rows skipped). \
                     Please check the format."
                ),
            ),
            ImportError::Malformed(e) => {
                tracing::error!(error = %e, "catalog file could not be parsed");
                AppError::new(
                    ErrorCode::ImportError,
                    "Error parsing file. Please ensure it is a valid CSV.",
                )
            }
        }
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        tracing::error!(error = %err, "document generation failed");
        AppError::new(ErrorCode::RenderError, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tenchem_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: AppError = CoreError::ProductNotFound("NCA".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: NCA");

        let err: AppError = CoreError::EmptyQuote.into();
        assert_eq!(err.code, ErrorCode::EmptyQuote);
        assert_eq!(err.exit_code(), 2);

        let err: AppError = CoreError::Validation(ValidationError::Required {
            field: "name".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_no_valid_products_is_a_distinct_notice() {
        let err: AppError = ImportError::NoValidProducts { skipped: 3 }.into();
        assert_eq!(err.code, ErrorCode::ImportError);
        assert!(err.message.starts_with("No valid products found"));
    }
}
