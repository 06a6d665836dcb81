//! Render errors.
//!
//! Layout never fails: missing customer fields become placeholders. Only
//! the PDF backend and the file write can go wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// printpdf failed to register a font or serialize the document.
    #[error("PDF backend error: {0}")]
    Pdf(String),

    /// Writing the finished document to disk failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<printpdf::Error> for RenderError {
    fn from(err: printpdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
