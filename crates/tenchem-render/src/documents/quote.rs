//! # Quotation
//!
//! ```text
//!  ┌─────────────────────────────────────────────────────────────┐
//!  │ [logo] TEN CHEM                                             │
//!  │ ─────────────────────────────────────────────────────────── │ divider
//!  │ FROM:                         BILL TO:                      │
//!  │ TENCHEM INDIA                 <party>                       │
//!  │ address / Ph / Email          Phone: <phone>                │
//!  │                               ╭────────────────────╮        │
//!  │                               │ Quote No / Date /  │        │
//!  │                               │ Valid Until        │        │
//!  │                               ╰────────────────────╯        │
//!  │ ┌──┬──────────────────────┬─────────┬─────────┬──────────┐  │
//!  │ │# │ Item Description     │Qty / UOM│Unit Pric│   Total  │  │ paginates
//!  │ └──┴──────────────────────┴─────────┴─────────┴──────────┘  │
//!  │                                Subtotal / Discount / TOTAL  │
//!  │ TERMS & CONDITIONS:                                         │
//!  │ ████████████ Thank you for your business! ████████████████  │ last page
//!  └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every page carries the watermark and the border. Blocks after the
//! table are measured and moved to a fresh page when they would run into
//! the footer band.

use chrono::Days;
use tenchem_core::{CompanyInfo, QuoteDocument};
use tracing::debug;

use crate::canvas::{Composer, DrawOp, Page, Stroke, TextAlign, TextRun};
use crate::documents::format_date;
use crate::layout::{
    draw_footer_band, draw_logo, Column, ColumnWidth, FramedTemplate, Table, TableStyle,
    TotalsBlock,
};
use crate::output::{sanitize_file_component, DocumentLayout};
use crate::style::{
    PageSize, RenderSettings, ACCENT_TINT, BRAND_DARK, BRAND_ORANGE, DIVIDER, TEXT_BODY,
    TEXT_STRONG,
};

const FOOTER_TEXT: &str = "Thank you for your business!";
const TERMS_HEADING: &str = "TERMS & CONDITIONS:";

const BODY_SIZE: f32 = 10.0;
const META_SIZE: f32 = 9.0;
const TERMS_SIZE: f32 = 8.0;

const TOTALS_LEAD: f32 = 10.0;
const TERMS_LEAD: f32 = 25.0;
const TERMS_FIRST: f32 = 6.0;
const TERMS_STEP: f32 = 4.0;

/// File name of a quote PDF. Both parts are sanitized so the name is a
/// single path component.
///
/// ```rust
/// use tenchem_render::documents::quote::quote_file_name;
///
/// assert_eq!(
///     quote_file_name("QT-2025-4821", "Shree Ram Builders"),
///     "Quote_QT-2025-4821_Shree_Ram_Builders.pdf"
/// );
/// assert_eq!(
///     quote_file_name("QT/2025/7", "M/s Patel Tiles"),
///     "Quote_QT_2025_7_M_s_Patel_Tiles.pdf"
/// );
/// ```
pub fn quote_file_name(quote_number: &str, party_name: &str) -> String {
    format!(
        "Quote_{}_{}.pdf",
        sanitize_file_component(quote_number),
        sanitize_file_component(party_name)
    )
}

/// The five closing terms, payment days and jurisdiction filled in.
pub fn terms(payment_terms_days: u32, jurisdiction: &str) -> [String; 5] {
    [
        format!("1. Payment: Strictly within {payment_terms_days} days from invoice date."),
        "2. GST: Extra as applicable.".to_string(),
        "3. Late Payment: Interest @ 24% p.a. applicable on delayed payments.".to_string(),
        "4. Price Validity: Prices subject to change without prior notice.".to_string(),
        format!("5. Disputes: Subject to {jurisdiction} Jurisdiction only."),
    ]
}

/// Lays out a quotation.
pub fn layout_quote(
    quote: &QuoteDocument,
    company: &CompanyInfo,
    settings: &RenderSettings,
) -> DocumentLayout {
    let size = PageSize::A4;
    let template = FramedTemplate {
        settings,
        watermark: true,
    };
    let mut composer = Composer::new(size, &template);
    let m = settings.margin;

    let start_y = draw_header(composer.page(), m);
    draw_parties(composer.page(), quote, company, m + 8.0, start_y);
    draw_metadata(composer.page(), quote, settings, start_y);

    // Item table
    composer.set_cursor(start_y + 50.0);
    item_table(quote, size, m).draw(&mut composer);

    // Totals
    composer.advance(TOTALS_LEAD);
    if composer.ensure_space(TotalsBlock::height(&quote.totals)) {
        debug!(quote = %quote.quote_number, "totals moved to new page");
    }
    let block = TotalsBlock::for_page(size.width, m);
    let y = composer.cursor();
    let last = block.draw(composer.page(), y, &quote.totals);
    composer.set_cursor(last);

    // Terms
    let terms = terms(quote.customer.payment_terms_days, &settings.jurisdiction);
    composer.advance(TERMS_LEAD);
    let terms_height = TERMS_FIRST + TERMS_STEP * (terms.len() - 1) as f32 + 2.0;
    if composer.ensure_space(terms_height) {
        debug!(quote = %quote.quote_number, "terms moved to new page");
    }
    let y = composer.cursor();
    draw_terms(composer.page(), &terms, m + 8.0, y);

    draw_footer_band(composer.page(), settings, FOOTER_TEXT);

    let pages = composer.finish();
    debug!(
        quote = %quote.quote_number,
        items = quote.line_items.len(),
        pages = pages.len(),
        "quote laid out"
    );

    DocumentLayout {
        title: format!("Quotation {}", quote.quote_number),
        file_name: quote_file_name(&quote.quote_number, quote.customer.display_party_name()),
        pages,
    }
}

/// Logo and divider. Returns the baseline of the party blocks.
fn draw_header(page: &mut Page, m: f32) -> f32 {
    let logo = m + 8.0;
    draw_logo(page, logo, logo, 0.5);

    let divider = logo + 20.0;
    page.line(
        (m + 5.0, divider),
        (page.size.width - m - 5.0, divider),
        Stroke::new(DIVIDER, 0.5),
    );
    logo + 30.0
}

fn draw_parties(page: &mut Page, quote: &QuoteDocument, company: &CompanyInfo, left: f32, y: f32) {
    let right = right_column_x(page);

    heading(page, "FROM:", left, y);
    page.text(
        TextRun::new(company.name.to_uppercase(), left, y + 6.0, BODY_SIZE)
            .bold()
            .color(TEXT_STRONG),
    );
    body(page, company.address.clone(), left, y + 11.0);
    body(page, format!("Ph: {}", company.phone), left, y + 16.0);
    body(page, format!("Email: {}", company.email), left, y + 21.0);

    let customer = &quote.customer;
    heading(page, "BILL TO:", right, y);
    page.text(
        TextRun::new(customer.display_party_name(), right, y + 6.0, BODY_SIZE)
            .bold()
            .color(TEXT_STRONG),
    );
    body(page, format!("Phone: {}", customer.display_phone()), right, y + 11.0);
}

fn draw_metadata(page: &mut Page, quote: &QuoteDocument, settings: &RenderSettings, y: f32) {
    let x = right_column_x(page);
    page.push(DrawOp::Rect {
        x,
        y: y + 18.0,
        width: 70.0,
        height: 20.0,
        radius: 2.0,
        fill: Some(ACCENT_TINT),
        stroke: None,
    });

    let valid_until = quote
        .issue_date
        .checked_add_days(Days::new(u64::from(settings.validity_days)))
        .unwrap_or(quote.issue_date);

    let lines = [
        format!("Quote No: {}", quote.quote_number),
        format!("Date: {}", format_date(quote.issue_date)),
        format!("Valid Until: {}", format_date(valid_until)),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        page.text(
            TextRun::new(line, x + 4.0, y + 24.0 + 5.0 * i as f32, META_SIZE).color(BRAND_DARK),
        );
    }
}

fn item_table(quote: &QuoteDocument, size: PageSize, m: f32) -> Table {
    let rows = quote
        .line_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![
                (i + 1).to_string(),
                item.product_name.clone(),
                item.quantity_with_uom(),
                item.unit_price.to_string(),
                item.line_total().to_string(),
            ]
        })
        .collect();

    Table::new(
        vec![
            Column::new("#", ColumnWidth::Fixed(12.0)).align(TextAlign::Center),
            Column::new("Item Description", ColumnWidth::Auto),
            Column::new("Qty / UOM", ColumnWidth::Fixed(30.0)).align(TextAlign::Center),
            Column::new("Unit Price", ColumnWidth::Fixed(30.0)).align(TextAlign::Right),
            Column::new("Total", ColumnWidth::Fixed(35.0))
                .align(TextAlign::Right)
                .bold(),
        ],
        m + 5.0,
        size.width - m - 5.0,
    )
    .with_style(TableStyle {
        font_size: 9.0,
        padding: 4.0,
        ..TableStyle::default()
    })
    .with_rows(rows)
}

fn draw_terms(page: &mut Page, terms: &[String], x: f32, y: f32) {
    page.text(
        TextRun::new(TERMS_HEADING, x, y, BODY_SIZE)
            .bold()
            .color(BRAND_DARK),
    );
    for (i, term) in terms.iter().enumerate() {
        page.text(
            TextRun::new(term.clone(), x, y + TERMS_FIRST + TERMS_STEP * i as f32, TERMS_SIZE)
                .color(TEXT_BODY),
        );
    }
}

fn right_column_x(page: &Page) -> f32 {
    page.size.width / 2.0 + 20.0
}

fn heading(page: &mut Page, text: &str, x: f32, y: f32) {
    page.text(
        TextRun::new(text, x, y, BODY_SIZE)
            .bold()
            .color(BRAND_ORANGE),
    );
}

fn body(page: &mut Page, text: String, x: f32, y: f32) {
    page.text(TextRun::new(text, x, y, BODY_SIZE).color(TEXT_BODY));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tenchem_core::{CustomerDetails, DiscountRate, LineItem, Money, Product, QuoteTotals};

    fn quote(items: usize, discount_percent: f64) -> QuoteDocument {
        let product = Product::new(
            "NCA",
            "NCA SILVER - Polymer Modified Adhesive (20kg)",
            "Bag",
            Money::from_major_minor(100, 0),
        );
        let line_items: Vec<LineItem> = (0..items)
            .map(|_| {
                let mut item = LineItem::from_product(&product, 3.0);
                item.discount = DiscountRate::from_percentage(discount_percent);
                item
            })
            .collect();
        QuoteDocument {
            quote_number: "QT-2025-4821".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            customer: CustomerDetails {
                party_name: "Shree Ram  Builders".to_string(),
                phone_number: String::new(),
                payment_terms_days: 15,
            },
            totals: QuoteTotals::compute(&line_items),
            line_items,
        }
    }

    fn layout(quote: &QuoteDocument) -> DocumentLayout {
        layout_quote(quote, &CompanyInfo::default(), &RenderSettings::default())
    }

    #[test]
    fn test_single_item_quote() {
        let doc = layout(&quote(1, 10.0));
        assert_eq!(doc.pages.len(), 1);

        let page = &doc.pages[0];
        assert!(page.contains_text("TENCHEM INDIA"));
        assert!(page.contains_text("Shree Ram  Builders"));
        assert!(page.contains_text("Phone: Not Provided"));
        assert!(page.contains_text("3 Bag"));
        assert!(page.contains_text("100.00"));
        assert!(page.contains_text("270.00"));
        assert!(page.contains_text("-30.00"));
        assert!(page.contains_text(FOOTER_TEXT));
    }

    #[test]
    fn test_discount_line_omitted_without_discount() {
        let doc = layout(&quote(1, 0.0));
        let page = &doc.pages[0];
        assert!(!page.contains_text("Discount:"));
        assert!(page.contains_text("Subtotal:"));
        assert!(page.contains_text("TOTAL:"));
    }

    #[test]
    fn test_metadata_dates() {
        let doc = layout(&quote(1, 0.0));
        let page = &doc.pages[0];
        assert!(page.contains_text("Quote No: QT-2025-4821"));
        assert!(page.contains_text("Date: 01/03/2025"));
        assert!(page.contains_text("Valid Until: 08/03/2025"));
    }

    #[test]
    fn test_terms_interpolate_days_and_jurisdiction() {
        let doc = layout(&quote(1, 0.0));
        let page = &doc.pages[0];
        assert!(page.contains_text("1. Payment: Strictly within 15 days from invoice date."));
        assert!(page.contains_text("5. Disputes: Subject to Surendranagar Jurisdiction only."));
    }

    #[test]
    fn test_file_name_uses_display_party() {
        let doc = layout(&quote(1, 0.0));
        assert_eq!(doc.file_name, "Quote_QT-2025-4821_Shree_Ram_Builders.pdf");

        let mut anonymous = quote(1, 0.0);
        anonymous.customer.party_name = "   ".to_string();
        assert_eq!(layout(&anonymous).file_name, "Quote_QT-2025-4821_Unknown.pdf");
    }

    #[test]
    fn test_file_name_with_slash_in_party() {
        let mut q = quote(1, 0.0);
        q.customer.party_name = "M/s Patel Tiles".to_string();
        let doc = layout(&q);
        assert_eq!(doc.file_name, "Quote_QT-2025-4821_M_s_Patel_Tiles.pdf");
        assert!(!doc.file_name.contains('/'));

        q.quote_number = "../QT-1".to_string();
        assert_eq!(layout(&q).file_name, "Quote_.._QT-1_M_s_Patel_Tiles.pdf");
    }

    #[test]
    fn test_long_quote_paginates() {
        let doc = layout(&quote(40, 5.0));
        assert!(doc.pages.len() > 1);

        let settings = RenderSettings::default();
        let bottom = settings.usable_bottom(PageSize::A4);
        for page in &doc.pages {
            // watermark under everything, border on every page
            assert!(matches!(page.ops[0], DrawOp::Polygon { fill: None, .. }));
            assert!(page.ops[1].text().is_some_and(|t| t.text == "TEN CHEM"));
            assert!(page.contains_text("Item Description"));
            for run in page.texts().filter(|t| t.text != FOOTER_TEXT && t.text != "TEN CHEM") {
                assert!(run.y <= bottom, "{} at {}", run.text, run.y);
            }
        }

        let last = doc.pages.last().unwrap();
        assert!(last.contains_text(FOOTER_TEXT));
        assert!(last.contains_text(TERMS_HEADING));
        assert!(!doc.pages[0].contains_text(FOOTER_TEXT));
    }
}
