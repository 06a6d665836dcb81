//! # PDF Backend
//!
//! Serializes a display list with printpdf and the builtin Helvetica faces.
//!
//! ## Coordinate Conversion
//! ```text
//!  layout (mm, top-left origin)         PDF (bottom-left origin)
//!  (0,0) ──────► x                      y ▲
//!    │                                    │
//!    ▼ y                                  │
//!                                       (0,0) ──────► x
//!
//!  pdf_y = page_height − layout_y       line widths: mm → pt
//! ```

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Pt, Rgb as PdfRgb, TextMatrix,
};
use tracing::debug;

use crate::canvas::{DrawOp, Page, Stroke, TextRun};
use crate::error::{RenderError, RenderResult};
use crate::metrics::PT_TO_MM;
use crate::style::{FontWeight, Rgb};

/// Segments used to approximate each rounded corner.
const CORNER_SEGMENTS: usize = 6;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Renders `pages` into a PDF byte stream.
pub fn write_pdf(title: &str, pages: &[Page]) -> RenderResult<Vec<u8>> {
    let Some(first) = pages.first() else {
        return Err(RenderError::Pdf(format!("{title}: document has no pages")));
    };

    let (doc, page_index, layer_index) = PdfDocument::new(
        title,
        Mm(first.size.width),
        Mm(first.size.height),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    let layer = doc.get_page(page_index).get_layer(layer_index);
    draw_page(&layer, first, &fonts);

    for page in &pages[1..] {
        let (page_index, layer_index) =
            doc.add_page(Mm(page.size.width), Mm(page.size.height), "Layer 1");
        let layer = doc.get_page(page_index).get_layer(layer_index);
        draw_page(&layer, page, &fonts);
    }

    let bytes = doc.save_to_bytes()?;
    debug!(title, pages = pages.len(), bytes = bytes.len(), "pdf serialized");
    Ok(bytes)
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    let height = page.size.height;
    let point = |(x, y): (f32, f32)| Point::new(Mm(x), Mm(height - y));

    for op in &page.ops {
        match op {
            DrawOp::Text(run) => draw_text(layer, run, height, fonts),
            DrawOp::Line { from, to, stroke } => {
                apply_stroke(layer, stroke);
                layer.add_line(Line {
                    points: vec![(point(*from), false), (point(*to), false)],
                    is_closed: false,
                });
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height: h,
                radius,
                fill,
                stroke,
            } => {
                let outline = rect_outline(*x, *y, *width, *h, *radius);
                draw_shape(layer, outline.into_iter().map(point).collect(), *fill, *stroke);
            }
            DrawOp::Polygon {
                points,
                fill,
                stroke,
            } => {
                draw_shape(layer, points.iter().copied().map(point).collect(), *fill, *stroke);
            }
        }
    }
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.unit();
    Color::Rgb(PdfRgb::new(r, g, b, None))
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / PT_TO_MM
}

fn apply_stroke(layer: &PdfLayerReference, stroke: &Stroke) {
    layer.set_outline_color(pdf_color(stroke.color));
    layer.set_outline_thickness(mm_to_pt(stroke.width));
}

fn draw_shape(layer: &PdfLayerReference, points: Vec<Point>, fill: Option<Rgb>, stroke: Option<Stroke>) {
    let mode = match (fill, stroke) {
        (Some(_), Some(_)) => PaintMode::FillStroke,
        (Some(_), None) => PaintMode::Fill,
        (None, Some(_)) => PaintMode::Stroke,
        (None, None) => return,
    };
    if let Some(color) = fill {
        layer.set_fill_color(pdf_color(color));
    }
    if let Some(stroke) = stroke {
        apply_stroke(layer, &stroke);
    }

    layer.add_polygon(Polygon {
        rings: vec![points.into_iter().map(|p| (p, false)).collect()],
        mode,
        winding_order: WindingOrder::NonZero,
    });
}

/// Corner points of a (possibly rounded) rectangle, clockwise from the
/// top-left, in layout coordinates.
fn rect_outline(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Vec<(f32, f32)> {
    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
    }

    // (centre, start angle) per corner, angles in layout space (y down)
    let corners = [
        ((x + r, y + r), 180.0_f32),
        ((x + w - r, y + r), 270.0),
        ((x + w - r, y + h - r), 0.0),
        ((x + r, y + h - r), 90.0),
    ];

    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for ((cx, cy), start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (start + 90.0 * step as f32 / CORNER_SEGMENTS as f32).to_radians();
            points.push((cx + r * angle.cos(), cy + r * angle.sin()));
        }
    }
    points
}

fn draw_text(layer: &PdfLayerReference, run: &TextRun, page_height: f32, fonts: &Fonts) {
    if run.text.is_empty() {
        return;
    }

    // Alignment offset runs along the (possibly rotated) baseline.
    let offset = run.left() - run.x;
    let theta = run.rotation.to_radians();
    let x = run.x + offset * theta.cos();
    let y = run.y - offset * theta.sin();

    let font = fonts.get(run.weight);
    layer.set_fill_color(pdf_color(run.color));
    layer.begin_text_section();
    layer.set_font(font, run.size);
    if run.char_spacing != 0.0 {
        layer.set_character_spacing(mm_to_pt(run.char_spacing));
    }
    layer.set_text_matrix(TextMatrix::TranslateRotate(
        Pt(mm_to_pt(x)),
        Pt(mm_to_pt(page_height - y)),
        run.rotation,
    ));
    layer.write_text(run.text.clone(), font);
    if run.char_spacing != 0.0 {
        layer.set_character_spacing(0.0);
    }
    layer.end_text_section();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{PageSize, BRAND_ORANGE};

    #[test]
    fn test_square_rect_outline() {
        let points = rect_outline(10.0, 20.0, 30.0, 40.0, 0.0);
        assert_eq!(points, vec![(10.0, 20.0), (40.0, 20.0), (40.0, 60.0), (10.0, 60.0)]);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let points = rect_outline(0.0, 0.0, 70.0, 20.0, 2.0);
        assert_eq!(points.len(), 4 * (CORNER_SEGMENTS + 1));
        for (x, y) in points {
            assert!((-1e-4..=70.0001).contains(&x));
            assert!((-1e-4..=20.0001).contains(&y));
        }
    }

    #[test]
    fn test_write_pdf_produces_pdf_bytes() {
        let mut page = Page::new(PageSize::A4);
        page.fill_rect(15.0, 15.0, 20.0, 10.0, BRAND_ORANGE);
        page.text(TextRun::new("Hello", 20.0, 40.0, 12.0).bold());
        page.text(TextRun::new("Rotated", 105.0, 148.5, 40.0).rotate(45.0));
        page.line((0.0, 0.0), (10.0, 10.0), Stroke::new(BRAND_ORANGE, 0.5));

        let bytes = write_pdf("Test", &[page.clone(), page]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(write_pdf("Empty", &[]), Err(RenderError::Pdf(_))));
    }

    #[test]
    fn test_mm_to_pt() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-3);
    }
}
