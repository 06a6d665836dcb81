//! # Brand Style
//!
//! Colours, page sizes and the tunable layout settings shared by every
//! document.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A4 page (210 × 297 mm)                                                 │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │ margin (15)                                                       │  │
//! │  │   ┌───────────────────────────────────────────────────────────┐   │  │
//! │  │   │  content                                                  │   │  │
//! │  │   │                                                           │   │  │
//! │  │   │  ─ ─ ─ ─ ─ ─ ─ usable bottom ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ │   │  │
//! │  │   │                 page_break_gap                            │   │  │
//! │  │   ├───────────────────────────────────────────────────────────┤   │  │
//! │  │   │███████████ footer band (10 mm, accent) ███████████████████│   │  │
//! │  │   └───────────────────────────────────────────────────────────┘   │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Colours
// =============================================================================

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Components scaled to `0.0..=1.0` for the PDF colour operators.
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

pub const BRAND_ORANGE: Rgb = Rgb::new(234, 88, 12);
pub const BRAND_DARK: Rgb = Rgb::new(30, 41, 59);
pub const WHITE: Rgb = Rgb::gray(255);

/// Divider under the quote header.
pub const DIVIDER: Rgb = Rgb::new(226, 232, 240);
/// Metadata box and alternate catalog rows.
pub const ACCENT_TINT: Rgb = Rgb::new(255, 247, 237);
pub const WATERMARK: Rgb = Rgb::new(248, 248, 250);
pub const CARD_BACKGROUND: Rgb = Rgb::gray(235);

pub const TEXT_STRONG: Rgb = Rgb::gray(50);
pub const TEXT_SOFT: Rgb = Rgb::gray(60);
pub const TEXT_BODY: Rgb = Rgb::gray(80);
pub const TEXT_MUTED: Rgb = Rgb::gray(100);
pub const TEXT_FAINT: Rgb = Rgb::gray(150);

/// Table grid lines.
pub const GRID: Rgb = Rgb::gray(200);

// =============================================================================
// Fonts
// =============================================================================

/// The two Helvetica faces every document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

// =============================================================================
// Page Sizes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
    };

    /// Landscape card stock.
    pub const BUSINESS_CARD: PageSize = PageSize {
        width: 89.0,
        height: 51.0,
    };
}

// =============================================================================
// Render Settings
// =============================================================================

fn default_margin() -> f32 {
    15.0
}

fn default_validity_days() -> u32 {
    tenchem_core::DEFAULT_VALIDITY_DAYS
}

fn default_page_break_gap() -> f32 {
    5.0
}

fn default_file_prefix() -> String {
    "TenChem".to_string()
}

fn default_jurisdiction() -> String {
    "Surendranagar".to_string()
}

/// Layout knobs exposed through the `[render]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Page margin in mm.
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// Days added to the issue date for "Valid Until".
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,

    /// Space kept free above the footer band before a page break (mm).
    #[serde(default = "default_page_break_gap")]
    pub page_break_gap: f32,

    /// Prefix of the catalog, brochure and card file names.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// City named in the disputes clause.
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            validity_days: default_validity_days(),
            page_break_gap: default_page_break_gap(),
            file_prefix: default_file_prefix(),
            jurisdiction: default_jurisdiction(),
        }
    }
}

impl RenderSettings {
    /// Height of the closing footer band.
    pub const FOOTER_HEIGHT: f32 = 10.0;

    /// Top edge of the footer band on a page of `size`.
    pub fn footer_top(&self, size: PageSize) -> f32 {
        size.height - self.margin - Self::FOOTER_HEIGHT
    }

    /// Lowest y a content block may reach before the page must break.
    pub fn usable_bottom(&self, size: PageSize) -> f32 {
        self.footer_top(size) - self.page_break_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let settings = RenderSettings::default();
        assert_eq!(settings.footer_top(PageSize::A4), 272.0);
        assert_eq!(settings.usable_bottom(PageSize::A4), 267.0);
        assert_eq!(settings.validity_days, 7);
    }

    #[test]
    fn test_rgb_unit() {
        let (r, g, b) = WHITE.unit();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
        assert_eq!(Rgb::gray(0).unit(), (0.0, 0.0, 0.0));
    }
}
