pub mod clean;
pub mod extract;
pub mod sections;

use std::path::Path;

use crate::error::ParseError;
use crate::loader::{self, DocumentFormat};
use crate::record::ResumeRecord;

/// Three-pass pipeline: raw text → cleaned text → sections → record.
pub fn parse_resume(source: &str, raw_text: &str, skill_phrases: &[String]) -> ResumeRecord {
    let cleaned = clean::clean(raw_text);
    let sections = sections::split_sections(&cleaned);
    extract::extract_all(source, &cleaned, &sections, skill_phrases)
}

/// Load one file and run the pipeline. Errors stay local to this document;
/// a failing file never affects siblings in a batch.
pub fn parse_file(path: &Path, skill_phrases: &[String]) -> Result<ResumeRecord, ParseError> {
    let format = DocumentFormat::from_path(path)?;
    let bytes = std::fs::read(path)
        .map_err(|e| ParseError::Extraction(format!("{}: {}", path.display(), e)))?;
    let extracted = loader::load(&bytes, format)?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(parse_resume(&source, &extracted.full_text, skill_phrases))
}
