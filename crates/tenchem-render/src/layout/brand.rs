//! Vector logo, wordmark and quote watermark.
//!
//! ```text
//!            /\                 (x+25s, y)
//!           /  \
//!   dark   /    \   accent       roofs
//!         /______\
//!        ┌──┐ + ┌──┐            walls + white window cross
//!        └──┘   └──┘
//!                     TEN CHEM  wordmark at (x+60s, y+22s)
//! ```

use crate::canvas::{DrawOp, Page, Stroke, TextAlign, TextRun};
use crate::metrics::text_width;
use crate::style::{FontWeight, Rgb, BRAND_DARK, BRAND_ORANGE, WATERMARK, WHITE};

/// Wordmark size at scale 1.0.
const WORDMARK_SIZE: f32 = 56.0;

/// Draws the full logo (mark and wordmark) with its top-left at `(x, y)`.
pub fn draw_logo(page: &mut Page, x: f32, y: f32, scale: f32) {
    draw_mark(page, x, y, scale);

    let s = scale;
    let size = WORDMARK_SIZE * s;
    page.text(
        TextRun::new("TEN", x + 60.0 * s, y + 22.0 * s, size)
            .bold()
            .color(BRAND_DARK),
    );
    page.text(
        TextRun::new("CHEM", x + 102.0 * s, y + 22.0 * s, size)
            .bold()
            .color(BRAND_ORANGE),
    );
}

/// The house mark alone: two roofs, two walls, window cross.
pub fn draw_mark(page: &mut Page, x: f32, y: f32, s: f32) {
    let apex = (x + 25.0 * s, y);
    let eaves = y + 15.0 * s;

    page.fill_polygon(vec![apex, (x, eaves), (x + 15.0 * s, eaves)], BRAND_DARK);
    page.fill_rect(x + 15.0 * s, eaves, 10.0 * s, 10.0 * s, BRAND_DARK);

    page.fill_polygon(
        vec![apex, (x + 50.0 * s, eaves), (x + 35.0 * s, eaves)],
        BRAND_ORANGE,
    );
    page.fill_rect(x + 30.0 * s, eaves, 10.0 * s, 10.0 * s, BRAND_ORANGE);

    let pane = Stroke::new(WHITE, 2.0 * s);
    page.line(
        (x + 27.5 * s, y + 15.0 * s),
        (x + 27.5 * s, y + 25.0 * s),
        pane,
    );
    page.line(
        (x + 22.5 * s, y + 20.0 * s),
        (x + 32.5 * s, y + 20.0 * s),
        pane,
    );
}

/// "TEN" + "CHEM" centred as one word on `center_x`, baseline `y`.
pub fn draw_centered_wordmark(page: &mut Page, center_x: f32, y: f32, size: f32, ten: Rgb, chem: Rgb) {
    let ten_width = text_width("TEN", FontWeight::Bold, size);
    let total = ten_width + text_width("CHEM", FontWeight::Bold, size);
    let left = center_x - total / 2.0;

    page.text(TextRun::new("TEN", left, y, size).bold().color(ten));
    page.text(
        TextRun::new("CHEM", left + ten_width, y, size)
            .bold()
            .color(chem),
    );
}

/// Faint diagonal "TEN CHEM" with a stroked triangle, centred on the page.
pub fn draw_watermark(page: &mut Page) {
    let cx = page.size.width / 2.0;
    let cy = page.size.height / 2.0;

    page.push(DrawOp::Polygon {
        points: vec![(cx - 80.0, cy + 20.0), (cx, cy - 100.0), (cx + 80.0, cy + 20.0)],
        fill: None,
        stroke: Some(Stroke::new(WATERMARK, 4.0)),
    });
    page.text(
        TextRun::new("TEN CHEM", cx, cy, 100.0)
            .bold()
            .color(WATERMARK)
            .align(TextAlign::Center)
            .rotate(45.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PageSize;

    #[test]
    fn test_logo_ops() {
        let mut page = Page::new(PageSize::A4);
        draw_logo(&mut page, 23.0, 23.0, 0.5);

        // 2 roofs, 2 walls, 2 window lines, 2 words
        assert_eq!(page.ops.len(), 8);
        let ten = page.find_text("TEN").unwrap();
        assert_eq!((ten.x, ten.y, ten.size), (53.0, 34.0, 28.0));
        assert_eq!(page.find_text("CHEM").unwrap().color, BRAND_ORANGE);
    }

    #[test]
    fn test_centered_wordmark_is_symmetric() {
        let mut page = Page::new(PageSize::A4);
        draw_centered_wordmark(&mut page, 105.0, 99.0, 50.0, WHITE, BRAND_ORANGE);
        let ten = page.find_text("TEN").unwrap().clone();
        let chem = page.find_text("CHEM").unwrap().clone();
        let right = chem.x + chem.width();
        assert!(((ten.x + right) / 2.0 - 105.0).abs() < 1e-3);
        assert!((chem.x - (ten.x + ten.width())).abs() < 1e-3);
    }

    #[test]
    fn test_watermark_is_rotated_and_faint() {
        let mut page = Page::new(PageSize::A4);
        draw_watermark(&mut page);
        assert!(matches!(page.ops[0], DrawOp::Polygon { fill: None, .. }));
        let run = page.find_text("TEN CHEM").unwrap();
        assert_eq!(run.rotation, 45.0);
        assert_eq!(run.color, WATERMARK);
        assert_eq!((run.x, run.y), (105.0, 148.5));
    }
}
