//! Business card on 89 × 51 mm stock.
//!
//! ```text
//!  ┌─────────────────────────────────────────┐
//!  │ [logo]                                  │
//!  │                                         │
//!  │                       │  TENCHEM INDIA  │  y 32
//!  │ ━━━━━━━━━━━┓          │ address         │  y 36
//!  │             ╲         │ phone           │  y 39
//!  │              ╲        │ email           │  y 42
//!  └─────────────────────────────────────────┘
//! ```

use tenchem_core::CompanyInfo;

use crate::canvas::{Page, Stroke, TextAlign, TextRun};
use crate::layout::draw_logo;
use crate::output::{sanitize_file_component, DocumentLayout};
use crate::style::{PageSize, RenderSettings, BRAND_DARK, BRAND_ORANGE, CARD_BACKGROUND, TEXT_SOFT};

const INSET: f32 = 5.0;

pub fn layout_business_card(company: &CompanyInfo, settings: &RenderSettings) -> DocumentLayout {
    let size = PageSize::BUSINESS_CARD;
    let PageSize {
        width: w,
        height: h,
    } = size;
    let mut page = Page::new(size);

    page.fill_rect(0.0, 0.0, w, h, CARD_BACKGROUND);

    let motif = Stroke::new(BRAND_ORANGE, 2.0);
    page.line((0.0, h - 15.0), (20.0, h - 15.0), motif);
    page.line((20.0, h - 15.0), (35.0, h), motif);

    draw_logo(&mut page, INSET, INSET, 0.3);

    let right = w - INSET;
    page.text(
        TextRun::new(company.name.to_uppercase(), right, 32.0, 10.0)
            .bold()
            .color(BRAND_DARK)
            .align(TextAlign::Right),
    );
    page.line(
        (right - 45.0, 30.0),
        (right - 45.0, 45.0),
        Stroke::new(BRAND_ORANGE, 0.5),
    );

    for (text, y) in [
        (&company.address, 36.0),
        (&company.phone, 39.0),
        (&company.email, 42.0),
    ] {
        page.text(
            TextRun::new(text.as_str(), right, y, 6.0)
                .color(TEXT_SOFT)
                .align(TextAlign::Right),
        );
    }

    DocumentLayout {
        title: format!("{} Business Card", company.name),
        file_name: format!(
            "{}_Business_Card.pdf",
            sanitize_file_component(&settings.file_prefix)
        ),
        pages: vec![page],
    }
}
