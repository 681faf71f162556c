//! Resume text extraction — one plain-text string out of an uploaded file.
//!
//! Formats are dispatched through the [`TextExtract`] capability so adding a
//! format means adding an extractor, not growing an `if/else` chain. The file
//! is read into memory once; the handle is released on every exit path.

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use std::path::Path;

use anyhow::Context;

use crate::errors::ExtractError;

/// Supported resume file formats, detected from the upload's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive detection; tolerates a leading dot. `None` is the
    /// "unsupported" arm.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Per-format text extraction capability.
pub trait TextExtract: Send + Sync {
    /// Produces the document's plain text. A page or paragraph with no text
    /// contributes nothing; only a structural failure is an error.
    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String>;
}

/// Extracts plain text from in-memory document bytes of a known format.
pub fn extract_bytes(format: DocumentFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    let extractor: &dyn TextExtract = match format {
        DocumentFormat::Pdf => &PdfExtractor,
        DocumentFormat::Docx => &DocxExtractor,
    };
    Ok(extractor.extract(bytes)?)
}

/// Extracts plain text from a resume file on disk.
///
/// The format is detected from the path extension before any I/O happens, so
/// an unsupported upload never touches the filesystem.
pub fn extract_file(path: &Path) -> Result<String, ExtractError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let format = DocumentFormat::from_extension(extension)
        .ok_or_else(|| ExtractError::UnsupportedFormat(extension.to_ascii_lowercase()))?;

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading resume file {}", path.display()))?;
    extract_bytes(format, &bytes)
}
