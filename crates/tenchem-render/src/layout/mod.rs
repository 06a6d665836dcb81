//! Layout primitives shared by the documents.

pub mod brand;
pub mod frame;
pub mod table;
pub mod totals;

pub use brand::{draw_centered_wordmark, draw_logo, draw_mark, draw_watermark};
pub use frame::{draw_border, draw_footer_band, FramedTemplate};
pub use table::{Column, ColumnWidth, RowLayout, Table, TableStyle};
pub use totals::TotalsBlock;
