//! # Display List and Page Composer
//!
//! The layout pass never talks to the PDF library. It records drawing
//! operations in millimetres with a top-left origin, one list per page.
//!
//! ## Composer Flow
//! ```text
//! Composer::new(size, template)
//!      │  template.begin_page(page #1)      e.g. watermark + frame
//!      ▼
//! ensure_space(block_height)
//!      │  cursor + height > usable_bottom ?
//!      ├── no  → draw at cursor
//!      └── yes → new_page()
//!                  template.begin_page(page #n)
//!                  cursor = template.content_top()
//!      ▼
//! finish() → Vec<Page>
//! ```

use crate::metrics::{spaced_text_width, text_width};
use crate::style::{FontWeight, PageSize, Rgb};

// =============================================================================
// Draw Operations
// =============================================================================

/// Horizontal anchoring of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Outline pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    /// Line width in mm.
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgb, width: f32) -> Self {
        Self { color, width }
    }
}

/// A run of text. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
    pub align: TextAlign,
    /// Extra space after each character, in mm.
    pub char_spacing: f32,
    /// Counter-clockwise rotation in degrees around the anchor.
    pub rotation: f32,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f32, y: f32, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            weight: FontWeight::Regular,
            color: Rgb::gray(0),
            align: TextAlign::Left,
            char_spacing: 0.0,
            rotation: 0.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, char_spacing: f32) -> Self {
        self.char_spacing = char_spacing;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Advance width in mm, letter spacing included.
    pub fn width(&self) -> f32 {
        if self.char_spacing == 0.0 {
            text_width(&self.text, self.weight, self.size)
        } else {
            spaced_text_width(&self.text, self.weight, self.size, self.char_spacing)
        }
    }

    /// X of the left end of the run after alignment.
    pub fn left(&self) -> f32 {
        match self.align {
            TextAlign::Left => self.x,
            TextAlign::Center => self.x - self.width() / 2.0,
            TextAlign::Right => self.x - self.width(),
        }
    }
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// Corner radius; zero for square corners.
        radius: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
}

impl DrawOp {
    pub fn text(&self) -> Option<&TextRun> {
        match self {
            DrawOp::Text(run) => Some(run),
            _ => None,
        }
    }
}

// =============================================================================
// Page
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub size: PageSize,
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn text(&mut self, run: TextRun) {
        self.ops.push(DrawOp::Text(run));
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            radius: 0.0,
            fill: Some(color),
            stroke: None,
        });
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: Stroke) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            radius: 0.0,
            fill: None,
            stroke: Some(stroke),
        });
    }

    pub fn fill_polygon(&mut self, points: Vec<(f32, f32)>, color: Rgb) {
        self.ops.push(DrawOp::Polygon {
            points,
            fill: Some(color),
            stroke: None,
        });
    }

    /// All text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(DrawOp::text)
    }

    /// Whether any run on the page reads exactly `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|run| run.text == text)
    }

    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().find(|run| run.text == text)
    }
}

// =============================================================================
// Page Template
// =============================================================================

/// Per-document page furniture, drawn whenever a page starts.
pub trait PageTemplate {
    /// Draws the background layer of a fresh page (watermark, frame...).
    fn begin_page(&self, page: &mut Page, page_number: usize);

    /// Where content resumes on a continuation page.
    fn content_top(&self) -> f32;

    /// Lowest y content may reach on a page of `size`.
    fn usable_bottom(&self, size: PageSize) -> f32;
}

/// No furniture: full page usable down to `bottom`.
pub struct BlankTemplate {
    pub top: f32,
    pub bottom_margin: f32,
}

impl PageTemplate for BlankTemplate {
    fn begin_page(&self, _page: &mut Page, _page_number: usize) {}

    fn content_top(&self) -> f32 {
        self.top
    }

    fn usable_bottom(&self, size: PageSize) -> f32 {
        size.height - self.bottom_margin
    }
}

// =============================================================================
// Composer
// =============================================================================

/// Accumulates pages and a vertical cursor.
pub struct Composer<'t> {
    size: PageSize,
    template: &'t dyn PageTemplate,
    pages: Vec<Page>,
    cursor: f32,
}

impl<'t> Composer<'t> {
    pub fn new(size: PageSize, template: &'t dyn PageTemplate) -> Self {
        let mut page = Page::new(size);
        template.begin_page(&mut page, 1);
        Self {
            size,
            template,
            pages: vec![page],
            cursor: template.content_top(),
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn set_cursor(&mut self, y: f32) {
        self.cursor = y;
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor += dy;
    }

    pub fn usable_bottom(&self) -> f32 {
        self.template.usable_bottom(self.size)
    }

    /// Space between the cursor and the usable bottom.
    pub fn remaining(&self) -> f32 {
        self.usable_bottom() - self.cursor
    }

    /// Starts a new page through the template and moves the cursor to
    /// its content top.
    pub fn new_page(&mut self) {
        let mut page = Page::new(self.size);
        self.template.begin_page(&mut page, self.pages.len() + 1);
        self.pages.push(page);
        self.cursor = self.template.content_top();
    }

    /// Breaks the page if a block of `height` mm would not fit below the
    /// cursor. Returns `true` when a break happened.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.cursor + height > self.usable_bottom() {
            self.new_page();
            true
        } else {
            false
        }
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BRAND_ORANGE;

    struct Marking;

    impl PageTemplate for Marking {
        fn begin_page(&self, page: &mut Page, page_number: usize) {
            page.text(TextRun::new(format!("page {page_number}"), 0.0, 5.0, 8.0));
        }

        fn content_top(&self) -> f32 {
            20.0
        }

        fn usable_bottom(&self, _size: PageSize) -> f32 {
            100.0
        }
    }

    #[test]
    fn test_text_run_alignment() {
        let run = TextRun::new("TOTAL:", 100.0, 50.0, 14.0).bold();
        let w = run.width();
        assert_eq!(run.left(), 100.0);
        assert!((run.clone().align(TextAlign::Right).left() - (100.0 - w)).abs() < 1e-4);
        assert!((run.align(TextAlign::Center).left() - (100.0 - w / 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_composer_starts_with_template() {
        let template = Marking;
        let composer = Composer::new(PageSize::A4, &template);
        assert_eq!(composer.cursor(), 20.0);
        let pages = composer.finish();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains_text("page 1"));
    }

    #[test]
    fn test_ensure_space_breaks_only_when_needed() {
        let template = Marking;
        let mut composer = Composer::new(PageSize::A4, &template);
        composer.set_cursor(70.0);

        assert!(!composer.ensure_space(30.0));
        assert_eq!(composer.page_count(), 1);

        assert!(composer.ensure_space(30.5));
        assert_eq!(composer.page_count(), 2);
        assert_eq!(composer.cursor(), 20.0);

        let pages = composer.finish();
        assert!(pages[1].contains_text("page 2"));
    }

    #[test]
    fn test_page_helpers() {
        let mut page = Page::new(PageSize::BUSINESS_CARD);
        page.fill_rect(0.0, 0.0, 10.0, 10.0, BRAND_ORANGE);
        page.text(TextRun::new("Hi", 1.0, 2.0, 6.0));
        assert_eq!(page.ops.len(), 2);
        assert_eq!(page.texts().count(), 1);
        assert_eq!(page.find_text("Hi").map(|r| r.x), Some(1.0));
    }
}
