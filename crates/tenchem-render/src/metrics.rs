//! # Text Metrics
//!
//! Helvetica advance widths for measuring, aligning and wrapping text.
//!
//! The builtin PDF fonts carry no metrics in the file, so the AFM widths
//! (units per 1000 em) for printable ASCII are tabulated here. Anything
//! outside that range is measured as an average glyph.
//!
//! ```text
//! width_mm = Σ advance / 1000 × size_pt × 25.4 / 72
//! ```

use crate::style::FontWeight;

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Baseline-to-baseline distance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Width used for characters outside the tables.
const FALLBACK_ADVANCE: u16 = 556;

/// Helvetica, code points 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// Helvetica-Bold, code points 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Advance width of one character in 1/1000 em.
pub fn char_advance(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    (c as u32)
        .checked_sub(32)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_ADVANCE)
}

/// Width of `text` in mm at `size_pt`.
///
/// ```rust
/// use tenchem_render::metrics::text_width;
/// use tenchem_render::style::FontWeight;
///
/// // 72 pt = 25.4 mm; "0" is 556/1000 em wide
/// let w = text_width("0", FontWeight::Regular, 72.0);
/// assert!((w - 0.556 * 25.4).abs() < 1e-4);
/// ```
pub fn text_width(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_advance(c, weight) as u32).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Width including extra spacing (mm) after every character but the last.
pub fn spaced_text_width(text: &str, weight: FontWeight, size_pt: f32, spacing: f32) -> f32 {
    let gaps = text.chars().count().saturating_sub(1) as f32;
    text_width(text, weight, size_pt) + gaps * spacing
}

/// Baseline-to-baseline distance in mm.
pub fn line_height(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM * LINE_HEIGHT_FACTOR
}

/// Greedy word wrap to `max_width` mm.
///
/// Explicit newlines are honoured; a single word wider than the line is
/// broken between characters. Always returns at least one line.
pub fn wrap_text(text: &str, weight: FontWeight, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if text_width(&candidate, weight, size_pt) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if text_width(word, weight, size_pt) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, weight, size_pt, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        lines.push(current);
    }

    lines
}

fn break_word(word: &str, weight: FontWeight, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if current.chars().count() > 1 && text_width(&current, weight, size_pt) > max_width {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    pieces.push(current);
    pieces
}
