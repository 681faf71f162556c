use thiserror::Error;

/// Errors surfaced by resume text extraction.
///
/// Parsing and eligibility evaluation deliberately have no error type — they
/// always terminate with a (possibly empty) result. Extraction is the one
/// stage that can genuinely fail, and callers are expected to leave any
/// previously stored profile fields untouched when it does.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The upload's extension is not a supported resume format.
    /// Carries the detected extension, lower-cased, without the dot.
    #[error("unsupported resume format '.{0}': only .pdf and .docx are supported")]
    UnsupportedFormat(String),

    /// The file was recognized but could not be read or decoded.
    #[error("resume text extraction failed: {0}")]
    ExtractionFailed(#[from] anyhow::Error),
}
