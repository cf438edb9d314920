use thiserror::Error;

/// Errors surfaced per document. Field extraction never produces these:
/// a field that cannot be found resolves to an empty value instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported format: {0} (supported: pdf, docx, txt)")]
    UnsupportedFormat(String),

    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
