//! # Commands
//!
//! One function per subcommand. Each loads what it needs, renders through
//! `tenchem-render` and saves into the output directory.
//!
//! ```text
//!  quote ──► draft ──► QuoteSession ──► quote_document() ──► render_quote
//!  catalog ─► catalog CSV / built-in ───────────────────────► render_catalog
//!  brochure ────────────────────────────────────────────────► render_brochure
//!  card ────────────────────────────────────────────────────► render_business_card
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tenchem_core::{generate_quote_number, import_products, Catalog, Product, QuoteSession};
use tenchem_render::{
    render_brochure, render_business_card, render_catalog, render_quote, RenderedDocument,
};
use tracing::{info, warn};

use crate::cli::{CatalogSource, QuoteArgs};
use crate::config::AppConfig;
use crate::draft::QuoteDraft;
use crate::error::{AppError, AppResult};

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
    pub out_dir: PathBuf,
    /// Issue date of quotes and effective date of the catalog.
    pub today: NaiveDate,
}

impl Context {
    fn save(&self, doc: RenderedDocument) -> AppResult<PathBuf> {
        Ok(doc.save_to(&self.out_dir)?)
    }

    /// Catalog from `--catalog`, else `[output] catalog_csv`, else the
    /// built-in product range.
    pub fn load_catalog(&self, source: &CatalogSource) -> AppResult<Catalog> {
        let path = source
            .catalog
            .as_deref()
            .or(self.config.output.catalog_csv.as_deref());

        match path {
            Some(path) => read_catalog(path),
            None => Ok(Catalog::sample()),
        }
    }
}

fn read_catalog(path: &Path) -> AppResult<Catalog> {
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let report = import_products(file)?;
    if report.skipped_rows > 0 {
        warn!(
            ?path,
            skipped = report.skipped_rows,
            "Some catalog rows were skipped"
        );
    }
    info!(?path, products = report.products.len(), "Catalog imported");
    Ok(Catalog::new(report.products))
}

// =============================================================================
// Subcommands
// =============================================================================

pub fn quote(ctx: &Context, args: &QuoteArgs) -> AppResult<PathBuf> {
    let catalog = ctx.load_catalog(&args.source)?;
    let draft = QuoteDraft::read(&args.draft)?;

    let mut session = QuoteSession::new(catalog);
    draft.apply(&mut session)?;

    let number = args
        .quote_number
        .clone()
        .unwrap_or_else(|| generate_quote_number(ctx.today));
    let document = session.quote_document(number, ctx.today)?;

    let rendered = render_quote(&document, &ctx.config.company, &ctx.config.render)?;
    ctx.save(rendered)
}

pub fn catalog(ctx: &Context, source: &CatalogSource) -> AppResult<PathBuf> {
    let catalog = ctx.load_catalog(source)?;
    let rendered = render_catalog(
        catalog.products(),
        &ctx.config.company,
        &ctx.config.render,
        ctx.today,
    )?;
    ctx.save(rendered)
}

pub fn brochure(ctx: &Context) -> AppResult<PathBuf> {
    ctx.save(render_brochure(&ctx.config.render)?)
}

pub fn card(ctx: &Context) -> AppResult<PathBuf> {
    ctx.save(render_business_card(&ctx.config.company, &ctx.config.render)?)
}

/// Quote first, so a bad draft fails before anything else is written.
pub fn all(ctx: &Context, args: &QuoteArgs) -> AppResult<Vec<PathBuf>> {
    Ok(vec![
        quote(ctx, args)?,
        catalog(ctx, &args.source)?,
        brochure(ctx)?,
        card(ctx)?,
    ])
}

/// One line per matching product: id, name, unit, price.
pub fn products(ctx: &Context, source: &CatalogSource, search: Option<&str>) -> AppResult<Vec<String>> {
    let catalog = ctx.load_catalog(source)?;
    let matches: Vec<&Product> = match search {
        Some(term) => catalog.search(term),
        None => catalog.products().iter().collect(),
    };
    Ok(matches
        .into_iter()
        .map(|p| format!("{:<10} {:<55} {:<5} {:>10}", p.id, p.name, p.uom, p.unit_price))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("tenchem-cli-{name}-{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            TempDir(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn context(dir: &Path) -> Context {
        Context {
            config: AppConfig::default(),
            out_dir: dir.join("out"),
            today: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        }
    }

    fn write_draft(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("draft.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_quote_writes_named_pdf() {
        let tmp = TempDir::new("quote");
        let ctx = context(&tmp.0);
        let args = QuoteArgs {
            draft: write_draft(
                &tmp.0,
                "[customer]\nparty_name = \"Patel Tiles\"\n[[items]]\nproduct_id = \"NCA\"\nquantity = 2\n",
            ),
            quote_number: Some("QT-2025-1001".into()),
            source: CatalogSource::default(),
        };

        let path = quote(&ctx, &args).unwrap();
        assert_eq!(path, tmp.0.join("out").join("Quote_QT-2025-1001_Patel_Tiles.pdf"));
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_quote_for_party_with_slash_is_saved() {
        let tmp = TempDir::new("slash");
        let ctx = context(&tmp.0);
        let args = QuoteArgs {
            draft: write_draft(
                &tmp.0,
                "[customer]\nparty_name = \"M/s Patel Tiles\"\n[[items]]\nproduct_id = \"NCA\"\n",
            ),
            quote_number: Some("QT/2025/1001".into()),
            source: CatalogSource::default(),
        };

        let path = quote(&ctx, &args).unwrap();
        assert_eq!(path, tmp.0.join("out").join("Quote_QT_2025_1001_M_s_Patel_Tiles.pdf"));
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_draft_is_refused() {
        let tmp = TempDir::new("empty");
        let ctx = context(&tmp.0);
        let args = QuoteArgs {
            draft: write_draft(&tmp.0, "[customer]\nparty_name = \"Nobody\"\n"),
            quote_number: None,
            source: CatalogSource::default(),
        };

        let err = quote(&ctx, &args).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyQuote);
        assert!(!tmp.0.join("out").exists());
    }

    #[test]
    fn test_catalog_from_csv() {
        let tmp = TempDir::new("csv");
        let csv = tmp.0.join("products.csv");
        fs::write(
            &csv,
            "ProductID,ProductName,UnitOfMeasure,UnitPrice\nX1,Primer,Can,450\nX2,Sealer,Can,abc\n",
        )
        .unwrap();
        let ctx = context(&tmp.0);
        let source = CatalogSource {
            catalog: Some(csv),
        };

        let listed = products(&ctx, &source, None).unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].contains("Primer"));
        assert!(listed[0].contains("450.00"));

        let path = catalog(&ctx, &source).unwrap();
        assert!(path.ends_with("TenChem_Product_Catalog.pdf"));
    }

    #[test]
    fn test_csv_without_valid_rows() {
        let tmp = TempDir::new("bad-csv");
        let csv = tmp.0.join("products.csv");
        fs::write(&csv, "ProductName,UnitPrice\nPrimer,free\n").unwrap();
        let ctx = context(&tmp.0);

        let err = ctx
            .load_catalog(&CatalogSource { catalog: Some(csv) })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ImportError);
    }

    #[test]
    fn test_products_search() {
        let tmp = TempDir::new("search");
        let ctx = context(&tmp.0);
        let listed = products(&ctx, &CatalogSource::default(), Some("spacer")).unwrap();
        assert_eq!(listed.len(), 3);
    }

    #[test]
    fn test_all_writes_four_documents() {
        let tmp = TempDir::new("all");
        let ctx = context(&tmp.0);
        let args = QuoteArgs {
            draft: write_draft(&tmp.0, "[[items]]\nproduct_id = \"EFA\"\n"),
            quote_number: Some("QT-2025-2002".into()),
            source: CatalogSource::default(),
        };

        let paths = all(&ctx, &args).unwrap();
        let names: Vec<String> = paths
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "Quote_QT-2025-2002_Unknown.pdf",
                "TenChem_Product_Catalog.pdf",
                "TenChem_Company_Catalog.pdf",
                "TenChem_Business_Card.pdf",
            ]
        );
    }
}
