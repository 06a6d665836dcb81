//! # tenchem-render: TenChem Document Renderer
//!
//! Produces the four printable TenChem documents as PDF bytes.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  QuoteDocument ─┐                                                       │
//! │  &[Product] ────┼──► documents::layout_*  ──► DocumentLayout            │
//! │  CompanyInfo ───┘     (pure, no I/O)           title, file_name,        │
//! │                         │                      Vec<Page>                │
//! │                         │ uses                     │                    │
//! │                         ▼                          ▼                    │
//! │              layout:: brand / frame /      pdf::write_pdf (printpdf)    │
//! │                       table / totals               │                    │
//! │              canvas:: Page, Composer               ▼                    │
//! │                                            RenderedDocument             │
//! │                                              .save_to(dir)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tenchem_core::CompanyInfo;
//! use tenchem_render::{render_business_card, RenderSettings};
//!
//! let card = render_business_card(&CompanyInfo::default(), &RenderSettings::default()).unwrap();
//! assert_eq!(card.file_name, "TenChem_Business_Card.pdf");
//! assert!(card.bytes.starts_with(b"%PDF"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod canvas;
pub mod documents;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod output;
pub mod pdf;
pub mod style;

// =============================================================================
// Re-exports
// =============================================================================

pub use canvas::{DrawOp, Page, TextRun};
pub use error::{RenderError, RenderResult};
pub use output::{DocumentLayout, RenderedDocument};
pub use style::{PageSize, RenderSettings};

use chrono::NaiveDate;
use tenchem_core::{CompanyInfo, Product, QuoteDocument};
use tracing::info;

// =============================================================================
// Document Operations
// =============================================================================

/// Renders a quotation.
pub fn render_quote(
    quote: &QuoteDocument,
    company: &CompanyInfo,
    settings: &RenderSettings,
) -> RenderResult<RenderedDocument> {
    let doc = documents::layout_quote(quote, company, settings).render()?;
    info!(
        quote = %quote.quote_number,
        file = %doc.file_name,
        pages = doc.page_count,
        grand_total = %quote.totals.grand_total,
        "quote rendered"
    );
    Ok(doc)
}

/// Renders the product price list, dated `effective`.
pub fn render_catalog(
    products: &[Product],
    company: &CompanyInfo,
    settings: &RenderSettings,
    effective: NaiveDate,
) -> RenderResult<RenderedDocument> {
    let doc = documents::layout_catalog(products, company, settings, effective).render()?;
    info!(file = %doc.file_name, products = products.len(), pages = doc.page_count, "catalog rendered");
    Ok(doc)
}

/// Renders the company brochure.
pub fn render_brochure(settings: &RenderSettings) -> RenderResult<RenderedDocument> {
    let doc = documents::layout_brochure(settings).render()?;
    info!(file = %doc.file_name, pages = doc.page_count, "brochure rendered");
    Ok(doc)
}

/// Renders the business card.
pub fn render_business_card(
    company: &CompanyInfo,
    settings: &RenderSettings,
) -> RenderResult<RenderedDocument> {
    let doc = documents::layout_business_card(company, settings).render()?;
    info!(file = %doc.file_name, "business card rendered");
    Ok(doc)
}
