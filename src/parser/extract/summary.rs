use crate::parser::sections::{Section, SectionKind};

/// The summary/objective section content verbatim (already cleaned), or an
/// empty string when the resume has none.
pub fn extract(sections: &[Section]) -> String {
    sections
        .iter()
        .filter(|s| s.kind == SectionKind::Summary)
        .flat_map(|s| s.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
