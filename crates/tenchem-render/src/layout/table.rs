//! # Auto-Paginating Table
//!
//! Grid table with a coloured header row, wrapped cell text and optional
//! striped body rows.
//!
//! ## Layout
//! ```text
//!   left                                                       right
//!    │◄────────────────────── table width ─────────────────────►│
//!    ┌──────┬───────────────────────────┬──────────┬──────────┐
//!    │  #   │ Item Description          │ Qty/UOM  │  Total   │  header
//!    ├──────┼───────────────────────────┼──────────┼──────────┤
//!    │  1   │ NCA SILVER - Polymer      │  3 Bag   │  270.00  │
//!    │      │ Modified Adhesive (20kg)  │          │          │  wrapped
//!    └──────┴───────────────────────────┴──────────┴──────────┘
//!      Fixed        Auto (remainder)        Fixed      Fixed
//! ```
//!
//! ## Pagination
//! Each body row is measured before it is drawn. A row that would cross
//! the composer's usable bottom starts a new page (the page template
//! redraws its furniture) and the header row is repeated first.

use tracing::debug;

use crate::canvas::{Composer, DrawOp, Page, Stroke, TextAlign, TextRun};
use crate::metrics::{line_height, wrap_text, PT_TO_MM};
use crate::style::{FontWeight, Rgb, BRAND_DARK, GRID, TEXT_STRONG, WHITE};

/// Baseline of the first line, below the top padding, as a fraction of
/// the font size.
const ASCENT_FACTOR: f32 = 0.8;

// =============================================================================
// Model
// =============================================================================

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Shares whatever the fixed columns leave.
    Auto,
    /// Fixed width in mm.
    Fixed(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    pub width: ColumnWidth,
    pub align: TextAlign,
    /// Weight of body cells in this column. Header cells are always bold.
    pub weight: FontWeight,
}

impl Column {
    pub fn new(header: impl Into<String>, width: ColumnWidth) -> Self {
        Self {
            header: header.into(),
            width,
            align: TextAlign::Left,
            weight: FontWeight::Regular,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

/// Visual style of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub font_size: f32,
    /// Uniform cell padding in mm.
    pub padding: f32,
    pub header_fill: Rgb,
    pub header_text: Rgb,
    pub body_text: Rgb,
    pub grid: Stroke,
    /// Fill of every second body row.
    pub stripe: Option<Rgb>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            padding: 5.0 * PT_TO_MM,
            header_fill: BRAND_DARK,
            header_text: WHITE,
            body_text: TEXT_STRONG,
            grid: Stroke::new(GRID, 0.1),
            stripe: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub style: TableStyle,
    /// Left edge in mm.
    pub left: f32,
    /// Right edge in mm.
    pub right: f32,
}

/// One row after wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub cells: Vec<Vec<String>>,
    pub height: f32,
}

// =============================================================================
// Layout
// =============================================================================

impl Table {
    pub fn new(columns: Vec<Column>, left: f32, right: f32) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            style: TableStyle::default(),
            left,
            right,
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Resolved column widths: fixed columns as given, the remainder split
    /// evenly between auto columns.
    pub fn column_widths(&self) -> Vec<f32> {
        let fixed: f32 = self
            .columns
            .iter()
            .filter_map(|c| match c.width {
                ColumnWidth::Fixed(w) => Some(w),
                ColumnWidth::Auto => None,
            })
            .sum();
        let autos = self
            .columns
            .iter()
            .filter(|c| c.width == ColumnWidth::Auto)
            .count();
        let share = if autos == 0 {
            0.0
        } else {
            (self.width() - fixed).max(0.0) / autos as f32
        };

        self.columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Auto => share,
            })
            .collect()
    }

    fn layout_cells(&self, cells: &[String], widths: &[f32], header: bool) -> RowLayout {
        let size = self.style.font_size;
        let padding = self.style.padding;

        let wrapped: Vec<Vec<String>> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (column, width))| {
                let weight = if header { FontWeight::Bold } else { column.weight };
                let text = cells.get(i).map(String::as_str).unwrap_or("");
                wrap_text(text, weight, size, (width - padding * 2.0).max(0.0))
            })
            .collect();

        let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        RowLayout {
            height: max_lines as f32 * line_height(size) + padding * 2.0,
            cells: wrapped,
        }
    }

    /// Header row after wrapping.
    pub fn layout_header(&self) -> RowLayout {
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.layout_cells(&headers, &self.column_widths(), true)
    }

    /// Every body row after wrapping, in order.
    pub fn layout_rows(&self) -> Vec<RowLayout> {
        let widths = self.column_widths();
        self.rows
            .iter()
            .map(|row| self.layout_cells(row, &widths, false))
            .collect()
    }

    fn draw_row(&self, page: &mut Page, top: f32, row: &RowLayout, widths: &[f32], kind: RowKind) {
        let style = &self.style;
        let fill = match kind {
            RowKind::Header => Some(style.header_fill),
            RowKind::Body { index } if index % 2 == 1 => style.stripe,
            RowKind::Body { .. } => None,
        };
        let color = match kind {
            RowKind::Header => style.header_text,
            RowKind::Body { .. } => style.body_text,
        };

        let first_baseline = top + style.padding + style.font_size * PT_TO_MM * ASCENT_FACTOR;
        let step = line_height(style.font_size);

        let mut x = self.left;
        for ((column, width), lines) in self.columns.iter().zip(widths).zip(&row.cells) {
            page.push(DrawOp::Rect {
                x,
                y: top,
                width: *width,
                height: row.height,
                radius: 0.0,
                fill,
                stroke: Some(style.grid),
            });

            let (weight, align) = match kind {
                RowKind::Header => (FontWeight::Bold, TextAlign::Left),
                RowKind::Body { .. } => (column.weight, column.align),
            };
            let anchor = match align {
                TextAlign::Left => x + style.padding,
                TextAlign::Center => x + width / 2.0,
                TextAlign::Right => x + width - style.padding,
            };

            for (n, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let mut run = TextRun::new(line.clone(), anchor, first_baseline + n as f32 * step, style.font_size)
                    .color(color)
                    .align(align);
                run.weight = weight;
                page.text(run);
            }

            x += width;
        }
    }

    /// Draws the table at the composer's cursor, breaking pages as needed.
    ///
    /// Leaves the cursor at the bottom edge of the last row and returns it.
    pub fn draw(&self, composer: &mut Composer<'_>) -> f32 {
        let widths = self.column_widths();
        let header = self.layout_header();
        let rows = self.layout_rows();

        // Never leave a header alone at the bottom of a page.
        let first = rows.first().map_or(0.0, |r| r.height);
        composer.ensure_space(header.height + first);
        self.draw_header(composer, &header, &widths);

        for (index, row) in rows.iter().enumerate() {
            if composer.cursor() + row.height > composer.usable_bottom() {
                composer.new_page();
                debug!(
                    row = index + 1,
                    page = composer.page_count(),
                    "table continues on new page"
                );
                self.draw_header(composer, &header, &widths);
            }
            let top = composer.cursor();
            self.draw_row(composer.page(), top, row, &widths, RowKind::Body { index });
            composer.advance(row.height);
        }

        composer.cursor()
    }

    fn draw_header(&self, composer: &mut Composer<'_>, header: &RowLayout, widths: &[f32]) {
        let top = composer.cursor();
        self.draw_row(composer.page(), top, header, widths, RowKind::Header);
        composer.advance(header.height);
    }
}

#[derive(Debug, Clone, Copy)]
enum RowKind {
    Header,
    Body { index: usize },
}
