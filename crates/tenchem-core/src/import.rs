//! # CSV Catalog Import
//!
//! Reads a header-based delimited file into products.
//!
//! ## Column Aliases
//! ```text
//! ┌──────────────┬──────────────────────────┬────────────────────────────┐
//! │ Field        │ Accepted headers         │ When missing / blank       │
//! ├──────────────┼──────────────────────────┼────────────────────────────┤
//! │ id           │ ProductID, id            │ fresh UUID                 │
//! │ name         │ ProductName, name        │ "Unknown Product"          │
//! │ uom          │ UnitOfMeasure, uom       │ "Unit"                     │
//! │ unit_price   │ UnitPrice, price         │ row dropped                │
//! └──────────────┴──────────────────────────┴────────────────────────────┘
//! ```
//!
//! The first alias with a non-blank value wins. A price that is missing,
//! not a number, or negative drops the row; dropped rows are counted in
//! [`ImportReport::skipped_rows`]. If no row survives the import fails
//! with [`ImportError::NoValidProducts`].

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use uuid::Uuid;

use crate::error::ImportError;
use crate::money::Money;
use crate::types::Product;

const ID_HEADERS: &[&str] = &["ProductID", "id"];
const NAME_HEADERS: &[&str] = &["ProductName", "name"];
const UOM_HEADERS: &[&str] = &["UnitOfMeasure", "uom"];
const PRICE_HEADERS: &[&str] = &["UnitPrice", "price"];

/// Fallback name for a row without one.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Fallback unit for a row without one.
pub const DEFAULT_UOM: &str = "Unit";

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub products: Vec<Product>,
    pub skipped_rows: usize,
}

/// Column positions resolved once from the header row.
struct Columns {
    id: Vec<usize>,
    name: Vec<usize>,
    uom: Vec<usize>,
    price: Vec<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Self {
        let find = |aliases: &[&str]| -> Vec<usize> {
            aliases
                .iter()
                .filter_map(|alias| headers.iter().position(|h| h == *alias))
                .collect()
        };
        Self {
            id: find(ID_HEADERS),
            name: find(NAME_HEADERS),
            uom: find(UOM_HEADERS),
            price: find(PRICE_HEADERS),
        }
    }
}

fn first_value<'r>(record: &'r StringRecord, positions: &[usize]) -> Option<&'r str> {
    positions
        .iter()
        .filter_map(|&i| record.get(i))
        .find(|value| !value.is_empty())
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Option<Product> {
    let price = first_value(record, &columns.price).and_then(Money::parse_decimal)?;
    if price.is_negative() {
        return None;
    }

    let id = first_value(record, &columns.id)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let name = first_value(record, &columns.name).unwrap_or(UNKNOWN_PRODUCT);
    let uom = first_value(record, &columns.uom).unwrap_or(DEFAULT_UOM);

    Some(Product::new(id, name, uom, price))
}

/// Imports products from CSV text.
///
/// ## Example
/// ```rust
/// use tenchem_core::import_products;
///
/// let csv = "ProductID,ProductName,UnitOfMeasure,UnitPrice\n\
///            NCA,NCA SILVER,Bag,450\n\
///            BAD,Broken Row,Bag,n/a\n";
/// let report = import_products(csv.as_bytes()).unwrap();
/// assert_eq!(report.products.len(), 1);
/// assert_eq!(report.skipped_rows, 1);
/// assert_eq!(report.products[0].unit_price.to_string(), "450.00");
/// ```
pub fn import_products<R: Read>(input: R) -> Result<ImportReport, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let columns = Columns::resolve(reader.headers()?);

    let mut products = Vec::new();
    let mut skipped_rows = 0;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        match parse_row(&record, &columns) {
            Some(product) => products.push(product),
            None => skipped_rows += 1,
        }
    }

    if products.is_empty() {
        return Err(ImportError::NoValidProducts {
            skipped: skipped_rows,
        });
    }

    Ok(ImportReport {
        products,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_headers() {
        let csv = "ProductID,ProductName,UnitOfMeasure,UnitPrice\nEG-1,Epoxy Grout,Kit,520.5\n";
        let report = import_products(csv.as_bytes()).unwrap();
        assert_eq!(
            report.products,
            vec![Product::new(
                "EG-1",
                "Epoxy Grout",
                "Kit",
                Money::from_cents(52_050)
            )]
        );
        assert_eq!(report.skipped_rows, 0);
    }

    #[test]
    fn test_short_aliases() {
        let csv = "id,name,uom,price\nTS-2,Tile Spacer,Pkt,35\n";
        let report = import_products(csv.as_bytes()).unwrap();
        assert_eq!(report.products[0].id, "TS-2");
        assert_eq!(report.products[0].uom, "Pkt");
    }

    #[test]
    fn test_fallbacks_for_missing_text_fields() {
        let csv = "price\n12\n";
        let report = import_products(csv.as_bytes()).unwrap();
        let product = &report.products[0];
        assert_eq!(product.name, "Unknown Product");
        assert_eq!(product.uom, "Unit");
        assert!(Uuid::parse_str(&product.id).is_ok());
    }

    #[test]
    fn test_first_non_blank_alias_wins() {
        let csv = "ProductName,name,UnitPrice\n,Fallback Name,10\n";
        let report = import_products(csv.as_bytes()).unwrap();
        assert_eq!(report.products[0].name, "Fallback Name");
    }

    #[test]
    fn test_non_numeric_price_is_excluded() {
        let csv = "id,name,uom,price\nA,Alpha,Bag,100\nB,Beta,Bag,abc\nC,Gamma,Bag,\nD,Delta,Bag,-5\n";
        let report = import_products(csv.as_bytes()).unwrap();
        let ids: Vec<&str> = report.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A"]);
        assert_eq!(report.skipped_rows, 3);
    }

    #[test]
    fn test_absurd_price_is_excluded() {
        let csv = "id,name,uom,price\nA,Alpha,Bag,1e30\nB,Beta,Bag,1e30\nC,Gamma,Bag,250\n";
        let report = import_products(csv.as_bytes()).unwrap();
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].id, "C");
        assert_eq!(report.skipped_rows, 2);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let csv = "id,name,uom,price\n\nA,Alpha,Bag,100\n\n,,,\n";
        let report = import_products(csv.as_bytes()).unwrap();
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.skipped_rows, 0);
    }

    #[test]
    fn test_zero_valid_rows_is_distinct_failure() {
        let csv = "id,name,uom,price\nA,Alpha,Bag,free\n";
        let err = import_products(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::NoValidProducts { skipped: 1 }));
    }

    #[test]
    fn test_header_only_file() {
        let err = import_products("id,name,uom,price\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::NoValidProducts { skipped: 0 }));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"id,name,price\nA,\xff\xfe,10\n";
        let err = import_products(bytes).unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
    }
}
