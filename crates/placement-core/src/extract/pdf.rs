use super::TextExtract;

/// PDF extraction backed by `pdf-extract`.
///
/// Pages are concatenated in document order; a page with no text layer (a
/// scanned image) contributes nothing rather than failing the document.
pub struct PdfExtractor;

impl TextExtract for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> anyhow::Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| anyhow::anyhow!("decoding PDF resume: {e}"))
    }
}
