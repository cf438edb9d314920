use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use tracing::debug;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Detect the declared format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            _ => Err(ParseError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Raw text pulled from one document: ordered page/paragraph blocks plus the
/// flattened full text. Immutable once returned.
#[derive(Debug)]
pub struct ExtractedText {
    pub blocks: Vec<String>,
    pub full_text: String,
}

impl ExtractedText {
    fn from_flat(text: String) -> Self {
        let blocks = text
            .split("\n\n")
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(String::from)
            .collect();
        ExtractedText {
            blocks,
            full_text: text,
        }
    }

    fn from_blocks(blocks: Vec<String>) -> Self {
        let full_text = blocks.join("\n");
        ExtractedText { blocks, full_text }
    }
}

/// Extract text from a document buffer, preserving page/paragraph order.
/// Reads nothing but the given bytes.
pub fn load(bytes: &[u8], format: DocumentFormat) -> Result<ExtractedText, ParseError> {
    match format {
        DocumentFormat::Pdf => {
            let text = pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ParseError::Extraction(format!("pdf: {}", e)))?;
            debug!(chars = text.len(), "extracted pdf text");
            Ok(ExtractedText::from_flat(text))
        }
        DocumentFormat::Docx => {
            let paragraphs = docx_paragraphs(bytes)?;
            debug!(paragraphs = paragraphs.len(), "extracted docx text");
            Ok(ExtractedText::from_blocks(paragraphs))
        }
        DocumentFormat::Txt => Ok(ExtractedText::from_flat(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

/// A .docx is a zip container; the body lives in word/document.xml with one
/// w:p element per paragraph and text inside w:t runs.
fn docx_paragraphs(bytes: &[u8]) -> Result<Vec<String>, ParseError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ParseError::Extraction(format!("docx: {}", e)))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ParseError::Extraction(format!("docx: word/document.xml: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ParseError::Extraction(format!("docx: {}", e)))?;
    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>, ParseError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text = true;
                }
            }
            Ok(Event::Text(e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ParseError::Extraction(format!("docx xml: {}", e)))?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"br" => current.push('\n'),
                b"tab" => current.push(' '),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Extraction(format!("docx xml: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs)
}

// ── Tests ──
