//! Page frame, footer band and the framed page template.

use crate::canvas::{Page, PageTemplate, Stroke, TextAlign, TextRun};
use crate::layout::brand::draw_watermark;
use crate::style::{PageSize, RenderSettings, BRAND_ORANGE, WHITE};

/// Border line width in mm.
pub const BORDER_WIDTH: f32 = 0.8;

/// Decorative border inset by the margin.
pub fn draw_border(page: &mut Page, margin: f32) {
    let PageSize { width, height } = page.size;
    page.stroke_rect(
        margin,
        margin,
        width - margin * 2.0,
        height - margin * 2.0,
        Stroke::new(BRAND_ORANGE, BORDER_WIDTH),
    );
}

/// Solid accent bar with centred, letter-spaced closing text.
pub fn draw_footer_band(page: &mut Page, settings: &RenderSettings, text: &str) {
    let PageSize { width, .. } = page.size;
    let top = settings.footer_top(page.size);
    let margin = settings.margin;

    page.fill_rect(
        margin,
        top,
        width - margin * 2.0,
        RenderSettings::FOOTER_HEIGHT,
        BRAND_ORANGE,
    );
    page.text(
        TextRun::new(text, width / 2.0, top + 6.5, 10.0)
            .bold()
            .color(WHITE)
            .align(TextAlign::Center)
            .spacing(1.0),
    );
}

/// Border on every page, optionally with the watermark underneath.
pub struct FramedTemplate<'a> {
    pub settings: &'a RenderSettings,
    pub watermark: bool,
}

impl PageTemplate for FramedTemplate<'_> {
    fn begin_page(&self, page: &mut Page, _page_number: usize) {
        if self.watermark {
            draw_watermark(page);
        }
        draw_border(page, self.settings.margin);
    }

    fn content_top(&self) -> f32 {
        self.settings.margin + 20.0
    }

    fn usable_bottom(&self, size: PageSize) -> f32 {
        self.settings.usable_bottom(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Composer, DrawOp};

    #[test]
    fn test_border_geometry() {
        let mut page = Page::new(PageSize::A4);
        draw_border(&mut page, 15.0);
        match &page.ops[0] {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
                ..
            } => {
                assert_eq!((*x, *y, *width, *height), (15.0, 15.0, 180.0, 267.0));
                assert!(fill.is_none());
                assert_eq!(stroke.map(|s| s.width), Some(0.8));
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_footer_band_position() {
        let settings = RenderSettings::default();
        let mut page = Page::new(PageSize::A4);
        draw_footer_band(&mut page, &settings, "Thank you for your business!");

        assert!(matches!(
            page.ops[0],
            DrawOp::Rect { y, height, .. } if y == 272.0 && height == 10.0
        ));
        let run = page.find_text("Thank you for your business!").unwrap();
        assert_eq!(run.y, 278.5);
        assert_eq!(run.char_spacing, 1.0);
        assert_eq!(run.align, TextAlign::Center);
    }

    #[test]
    fn test_framed_template_draws_watermark_first() {
        let settings = RenderSettings::default();
        let template = FramedTemplate {
            settings: &settings,
            watermark: true,
        };
        let mut composer = Composer::new(PageSize::A4, &template);
        composer.new_page();
        let pages = composer.finish();

        for page in &pages {
            assert!(matches!(page.ops[0], DrawOp::Polygon { .. }));
            assert!(page.ops[1].text().is_some_and(|t| t.text == "TEN CHEM"));
            assert!(matches!(page.ops[2], DrawOp::Rect { .. }));
        }
    }
}
