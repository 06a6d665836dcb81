//! Product catalog: price list of every product with an accent header.

use chrono::NaiveDate;
use tenchem_core::{CompanyInfo, Product};
use tracing::debug;

use crate::canvas::{BlankTemplate, Composer, Stroke, TextAlign, TextRun};
use crate::documents::format_date;
use crate::layout::{draw_logo, Column, ColumnWidth, Table, TableStyle};
use crate::output::{sanitize_file_component, DocumentLayout};
use crate::style::{
    PageSize, RenderSettings, ACCENT_TINT, BRAND_DARK, BRAND_ORANGE, TEXT_FAINT, TEXT_MUTED,
};

pub const DISCLAIMER: &str =
    "Prices are subject to change without notice. GST extra as applicable.";

/// Lays out the price list. `effective` is printed as the effective date.
pub fn layout_catalog(
    products: &[Product],
    company: &CompanyInfo,
    settings: &RenderSettings,
    effective: NaiveDate,
) -> DocumentLayout {
    let size = PageSize::A4;
    let m = settings.margin;
    // the disclaimer sits 15 mm above the bottom edge
    let template = BlankTemplate {
        top: m,
        bottom_margin: m + 5.0,
    };
    let mut composer = Composer::new(size, &template);

    let page = composer.page();
    page.line(
        (m, m + 15.0),
        (size.width - m, m + 15.0),
        Stroke::new(BRAND_ORANGE, 2.0),
    );
    draw_logo(page, m, m, 0.6);
    page.text(
        TextRun::new("PRODUCT CATALOG", size.width - m, m + 10.0, 24.0)
            .bold()
            .color(BRAND_DARK)
            .align(TextAlign::Right),
    );
    page.text(
        TextRun::new(
            format!("Effective Date: {}", format_date(effective)),
            size.width - m,
            m + 18.0,
            10.0,
        )
        .color(TEXT_MUTED)
        .align(TextAlign::Right),
    );
    page.text(
        TextRun::new(
            format!("{} | {} | {}", company.address, company.phone, company.email),
            m,
            m + 25.0,
            9.0,
        )
        .color(TEXT_MUTED),
    );

    composer.set_cursor(m + 30.0);
    price_table(products, size, m).draw(&mut composer);

    composer.page().text(
        TextRun::new(DISCLAIMER, size.width / 2.0, size.height - 15.0, 8.0)
            .color(TEXT_FAINT)
            .align(TextAlign::Center),
    );

    let pages = composer.finish();
    debug!(products = products.len(), pages = pages.len(), "catalog laid out");

    DocumentLayout {
        title: format!("{} Product Catalog", company.name),
        file_name: format!(
            "{}_Product_Catalog.pdf",
            sanitize_file_component(&settings.file_prefix)
        ),
        pages,
    }
}

fn price_table(products: &[Product], size: PageSize, m: f32) -> Table {
    let rows = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.name.clone(),
                p.uom.clone(),
                p.unit_price.to_string(),
            ]
        })
        .collect();

    Table::new(
        vec![
            Column::new("#", ColumnWidth::Fixed(15.0)).align(TextAlign::Center),
            Column::new("Product Name", ColumnWidth::Auto),
            Column::new("UOM", ColumnWidth::Fixed(25.0)).align(TextAlign::Center),
            Column::new("List Price (INR)", ColumnWidth::Fixed(35.0)).align(TextAlign::Right),
        ],
        m,
        size.width - m,
    )
    .with_style(TableStyle {
        header_fill: BRAND_ORANGE,
        stripe: Some(ACCENT_TINT),
        ..TableStyle::default()
    })
    .with_rows(rows)
}
