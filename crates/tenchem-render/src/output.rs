//! Finished documents and file naming.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::canvas::Page;
use crate::error::{RenderError, RenderResult};
use crate::pdf::write_pdf;

/// A laid-out document that has not been serialized yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub title: String,
    pub file_name: String,
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    /// Serializes the display list into PDF bytes.
    pub fn render(self) -> RenderResult<RenderedDocument> {
        let bytes = write_pdf(&self.title, &self.pages)?;
        Ok(RenderedDocument {
            file_name: self.file_name,
            page_count: self.pages.len(),
            bytes,
        })
    }
}

/// A PDF ready to be saved or streamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl RenderedDocument {
    /// Writes the document into `dir` (created if missing) under its
    /// file name and returns the full path.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> RenderResult<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| RenderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;

        info!(?path, pages = self.page_count, bytes = self.bytes.len(), "document saved");
        Ok(path)
    }
}

/// Characters that cannot appear in a file name on at least one platform.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Makes `text` safe to use as part of a single file name.
///
/// Every run of whitespace, path separators, reserved punctuation and
/// control characters becomes one underscore, so the result never names
/// a subdirectory.
///
/// ```rust
/// use tenchem_render::output::sanitize_file_component;
///
/// assert_eq!(sanitize_file_component("Shree  Ram\tBuilders"), "Shree_Ram_Builders");
/// assert_eq!(sanitize_file_component("M/s Patel Tiles"), "M_s_Patel_Tiles");
/// ```
pub fn sanitize_file_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() || c.is_control() || RESERVED.contains(&c) {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
