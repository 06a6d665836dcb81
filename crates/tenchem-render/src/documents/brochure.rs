//! # Company Brochure
//!
//! ```text
//!   page 1: cover            page 2: vision/mission     page 3+: product range
//!  ┌──────────────────┐      ┌──────────────────┐       ┌─┬────────────────┐
//!  │█████████████◣◣◣◣│      │▓▓ [logo] ▓▓▓▓▓▓▓▓│ band  │▓│ PRODUCT RANGE  │
//!  │██ TENCHEM ██████ │      │ Our Vision       │       │▓│ NCA SILVER     │
//!  │██ CONSTRUCTION ██│      │ ...              │       │▓│ description... │
//!  │██ CHEMICALS █████│      │ Our Mission      │       │▓│ NSA GOLD       │
//!  │◢◢◢◢ PORTFOLIO ███│      │ ...              │       │▓│ ...            │
//!  └──────────────────┘      └──────────────────┘       └─┴────────────────┘
//! ```

use tracing::debug;

use crate::canvas::{Composer, Page, PageTemplate, TextAlign, TextRun};
use crate::layout::{draw_centered_wordmark, draw_logo};
use crate::metrics::wrap_text;
use crate::output::{sanitize_file_component, DocumentLayout};
use crate::style::{
    FontWeight, PageSize, RenderSettings, BRAND_DARK, BRAND_ORANGE, TEXT_BODY, TEXT_SOFT, WHITE,
};

pub const VISION: &str = "Our vision is to become the foremost company providing innovative \
construction solutions to the building and construction industry.";

pub const MISSION: &str = "We aspire to bring global construction technology to India and be \
your local partner for global construction products.";

/// Featured products on the product range page: (title, description).
pub const HIGHLIGHTS: [(&str, &str); 6] = [
    (
        "NCA SILVER",
        "Polymer Modified Adhesive. Suitable For Fixing Of Ceramic, Glaze, Mosaic, Etc. Tiles \
         For Flooring. Good Bonding Strength. Self-curing.",
    ),
    (
        "NSA GOLD",
        "Polymer Modified Adhesive. Suitable For Fixing Of Vitrified, Ceramic, Glaze, Mosaic, \
         Etc. Tiles For Flooring And Wall. High Polymer Modified.",
    ),
    (
        "EFA PLATINUM",
        "Extra Fix Adhesive. Suitable For Fixing Of Marbles, Vitrified, Ceramic, Glaze, Mosaic, \
         Etc. Tiles For Flooring, Wall and Elevation.",
    ),
    (
        "VFA DIAMOND",
        "Vitro Fix Adhesive. Polymer modified adhesive suitable for fixing of Marbles, stones \
         and all types of tiles over wide range of Interior and Exterior surfaces.",
    ),
    (
        "TILE GROUT",
        "Water resistant cementitious tile joint filler for all kinds of tiles. Effectively \
         fills gaps and levels itself.",
    ),
    (
        "EPOXY GROUT",
        "Resin based three part epoxy tile joint filler which exhibits stain resistant, \
         chemical resistant, hard wearing & impervious properties.",
    ),
];

const HEADING_SIZE: f32 = 24.0;
const PARAGRAPH_SIZE: f32 = 12.0;
const PARAGRAPH_STEP: f32 = 6.0;

const STRIPE_WIDTH: f32 = 15.0;
const RANGE_X: f32 = 25.0;
const TITLE_SIZE: f32 = 14.0;
const DESCRIPTION_SIZE: f32 = 10.0;
const DESCRIPTION_LEAD: f32 = 7.0;
const DESCRIPTION_STEP: f32 = 5.0;
const HIGHLIGHT_GAP: f32 = 10.0;

/// Lays out the three-section brochure.
pub fn layout_brochure(settings: &RenderSettings) -> DocumentLayout {
    let size = PageSize::A4;

    let mut pages = vec![cover_page(size), vision_page(size, settings.margin)];
    pages.extend(product_range_pages(size, settings.margin));

    debug!(pages = pages.len(), "brochure laid out");
    DocumentLayout {
        title: "TenChem Company Brochure".to_string(),
        file_name: format!(
            "{}_Company_Catalog.pdf",
            sanitize_file_component(&settings.file_prefix)
        ),
        pages,
    }
}

fn cover_page(size: PageSize) -> Page {
    let PageSize {
        width: w,
        height: h,
    } = size;
    let mut page = Page::new(size);

    page.fill_rect(0.0, 0.0, w, h, BRAND_DARK);
    page.fill_polygon(vec![(0.0, h), (w, h), (0.0, h - 100.0)], BRAND_ORANGE);
    page.fill_polygon(vec![(w, 0.0), (w, 100.0), (w - 100.0, 0.0)], BRAND_ORANGE);

    draw_centered_wordmark(&mut page, w / 2.0, h / 3.0, 50.0, WHITE, BRAND_ORANGE);

    for (text, y) in [("CONSTRUCTION", h / 2.0), ("CHEMICALS", h / 2.0 + 12.0)] {
        page.text(
            TextRun::new(text, w / 2.0, y, 24.0)
                .bold()
                .color(WHITE)
                .align(TextAlign::Center),
        );
    }
    page.text(
        TextRun::new("PORTFOLIO", w / 2.0, h - 30.0, 16.0)
            .color(WHITE)
            .align(TextAlign::Center)
            .spacing(5.0),
    );
    page
}

fn vision_page(size: PageSize, margin: f32) -> Page {
    let mut page = Page::new(size);
    page.fill_rect(0.0, 0.0, size.width, 40.0, BRAND_ORANGE);
    draw_logo(&mut page, margin, 10.0, 0.4);

    let max_width = size.width - margin * 2.0;
    let mut y = 60.0;
    for (heading, text) in [("Our Vision", VISION), ("Our Mission", MISSION)] {
        page.text(
            TextRun::new(heading, margin, y, HEADING_SIZE)
                .bold()
                .color(BRAND_ORANGE),
        );
        y += 10.0;

        let lines = wrap_text(text, FontWeight::Regular, PARAGRAPH_SIZE, max_width);
        for line in lines {
            page.text(TextRun::new(line, margin, y, PARAGRAPH_SIZE).color(TEXT_SOFT));
            y += PARAGRAPH_STEP;
        }
        y += 30.0 - PARAGRAPH_STEP;
    }
    page
}

/// Accent stripe down the left edge of every product range page.
struct SideStripe {
    margin: f32,
}

impl PageTemplate for SideStripe {
    fn begin_page(&self, page: &mut Page, _page_number: usize) {
        let height = page.size.height;
        page.fill_rect(0.0, 0.0, STRIPE_WIDTH, height, BRAND_ORANGE);
    }

    fn content_top(&self) -> f32 {
        30.0
    }

    fn usable_bottom(&self, size: PageSize) -> f32 {
        size.height - self.margin
    }
}

fn product_range_pages(size: PageSize, margin: f32) -> Vec<Page> {
    let template = SideStripe { margin };
    let mut composer = Composer::new(size, &template);

    composer.page().text(
        TextRun::new("PRODUCT RANGE", RANGE_X, 30.0, 22.0)
            .bold()
            .color(BRAND_DARK),
    );
    composer.set_cursor(50.0);

    let max_width = size.width - 40.0;
    for (title, description) in HIGHLIGHTS {
        let lines = wrap_text(description, FontWeight::Regular, DESCRIPTION_SIZE, max_width);
        let height = DESCRIPTION_LEAD + (lines.len() - 1) as f32 * DESCRIPTION_STEP + 2.0;
        composer.ensure_space(height);

        let top = composer.cursor();
        let page = composer.page();
        page.text(
            TextRun::new(title, RANGE_X, top, TITLE_SIZE)
                .bold()
                .color(BRAND_ORANGE),
        );
        for (i, line) in lines.iter().enumerate() {
            let y = top + DESCRIPTION_LEAD + i as f32 * DESCRIPTION_STEP;
            page.text(TextRun::new(line.clone(), RANGE_X, y, DESCRIPTION_SIZE).color(TEXT_BODY));
        }

        composer.advance(DESCRIPTION_LEAD + lines.len() as f32 * DESCRIPTION_STEP + HIGHLIGHT_GAP);
    }

    composer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;

    #[test]
    fn test_three_pages_in_order() {
        let doc = layout_brochure(&RenderSettings::default());
        assert_eq!(doc.pages.len(), 3);
        assert_eq!(doc.file_name, "TenChem_Company_Catalog.pdf");

        assert!(doc.pages[0].contains_text("PORTFOLIO"));
        assert!(doc.pages[1].contains_text("Our Mission"));
        assert!(doc.pages[2].contains_text("PRODUCT RANGE"));
    }

    #[test]
    fn test_cover_is_full_bleed() {
        let doc = layout_brochure(&RenderSettings::default());
        let cover = &doc.pages[0];
        assert!(matches!(
            cover.ops[0],
            DrawOp::Rect { x, y, width, height, fill: Some(c), .. }
                if (x, y, width, height) == (0.0, 0.0, 210.0, 297.0) && c == BRAND_DARK
        ));
        let portfolio = cover.find_text("PORTFOLIO").unwrap();
        assert_eq!(portfolio.char_spacing, 5.0);
        assert_eq!(portfolio.y, 267.0);
    }

    #[test]
    fn test_paragraphs_wrap_inside_margins() {
        let doc = layout_brochure(&RenderSettings::default());
        let page = &doc.pages[1];
        for run in page.texts().filter(|t| t.size == PARAGRAPH_SIZE) {
            assert!(run.x + run.width() <= 195.0 + 1e-3, "{}", run.text);
        }
        let vision = page.find_text("Our Vision").unwrap().y;
        let mission = page.find_text("Our Mission").unwrap().y;
        assert!(mission > vision + 30.0);
    }

    #[test]
    fn test_every_highlight_is_listed() {
        let doc = layout_brochure(&RenderSettings::default());
        let range: Vec<&Page> = doc.pages[2..].iter().collect();
        for (title, _) in HIGHLIGHTS {
            assert!(range.iter().any(|p| p.contains_text(title)), "{title}");
        }
        for page in range {
            assert!(matches!(page.ops[0], DrawOp::Rect { width, .. } if width == STRIPE_WIDTH));
        }
    }

    #[test]
    fn test_highlights_advance_by_description_lines() {
        let doc = layout_brochure(&RenderSettings::default());
        let page = &doc.pages[2];
        let first = page.find_text("NCA SILVER").unwrap().y;
        let second = page.find_text("NSA GOLD").unwrap().y;
        let lines = wrap_text(HIGHLIGHTS[0].1, FontWeight::Regular, DESCRIPTION_SIZE, 170.0).len();
        assert_eq!(first, 50.0);
        assert!((second - first - (7.0 + lines as f32 * 5.0 + 10.0)).abs() < 1e-4);
    }
}
