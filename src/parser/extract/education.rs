use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{Section, SectionKind};
use crate::record::EducationEntry;

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor(?:'s)?|master(?:'s)?|doctor(?:ate)?|phd|ph\.\s?d|m\.?b\.?a|b\.?\s?tech|m\.?\s?tech|b\.?sc|m\.?sc|b\.s|m\.s|b\.a|m\.a|b\.e|m\.e|associate|diploma|high school|secondary school)\.?(?:[^a-z]|$)",
    )
    .unwrap()
});

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:0?[1-9]|1[0-2])/)?(?:19|20)\d{2}\s*(?:[-–—]|to)\s*(?:(?:(?:0?[1-9]|1[0-2])/)?(?:19|20)\d{2}|present)\b",
    )
    .unwrap()
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\b").unwrap()
});

/// Scan education section lines for degree keywords, institutions, and date
/// ranges. A line with no degree keyword still yields an entry when both an
/// institution and a date range are present.
pub fn extract(sections: &[Section]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();

    for section in sections.iter().filter(|s| s.kind == SectionKind::Education) {
        for line in section.lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            let dates = DATE_RANGE_RE
                .find(line)
                .or_else(|| YEAR_RE.find(line))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            if !DEGREE_RE.is_match(line) && dates.is_empty() {
                continue;
            }

            let without_dates = if dates.is_empty() {
                line.to_string()
            } else {
                line.replacen(&dates, "", 1)
            };
            let parts: Vec<String> = without_dates
                .split(',')
                .map(|p| {
                    p.trim()
                        .trim_matches(|c: char| matches!(c, '-' | '–' | '—' | '(' | ')' | '|'))
                        .trim()
                        .to_string()
                })
                .filter(|p| !p.is_empty())
                .collect();

            let degree = parts
                .iter()
                .find(|p| DEGREE_RE.is_match(p))
                .cloned()
                .unwrap_or_default();
            let institution = parts
                .iter()
                .find(|p| **p != degree && looks_like_institution(p))
                .cloned()
                .unwrap_or_default();

            // keep-without-degree rule
            if degree.is_empty() && (institution.is_empty() || dates.is_empty()) {
                continue;
            }

            entries.push(EducationEntry {
                degree,
                institution,
                dates,
            });
        }
    }

    entries
}

fn looks_like_institution(part: &str) -> bool {
    if INSTITUTION_RE.is_match(part) {
        return true;
    }
    // capitalized multi-word sequence, e.g. "Politecnico di Milano"
    part.split_whitespace()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count()
        >= 2
}

// ── Tests ──
