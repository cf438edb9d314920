use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{heading_kind, Section, SectionKind};
use crate::record::Contact;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\(?\d[\d\s().-]{5,18}\d").unwrap());
static YEAR_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}\s*[-–—]\s*(?:19|20)\d{2}$").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?(?:linkedin\.com|github\.com)/[^\s,;|]+|https?://[^\s,;|]+")
        .unwrap()
});

/// Pull email, phone, profile links, and a best-effort name. Searches the
/// contact and preamble sections first, falling back to the full text when
/// nothing is found there. Absence is an empty value, never an error.
pub fn extract(full_text: &str, sections: &[Section]) -> Contact {
    let primary: String = sections
        .iter()
        .filter(|s| matches!(s.kind, SectionKind::Contact | SectionKind::Other))
        .flat_map(|s| s.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n");

    let email = find_email(&primary)
        .or_else(|| find_email(full_text))
        .unwrap_or_default();
    let phone = find_phone(&primary)
        .or_else(|| find_phone(full_text))
        .unwrap_or_default();
    let mut links = find_links(&primary);
    if links.is_empty() {
        links = find_links(full_text);
    }

    Contact {
        name: find_name(full_text),
        email,
        phone,
        links,
    }
}

fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First digit group with optional separators whose digit count is 7-15.
/// Bare year ranges ("2018-2022") pass the digit filter and are rejected
/// explicitly.
fn find_phone(text: &str) -> Option<String> {
    for m in PHONE_RE.find_iter(text) {
        let candidate = m.as_str().trim();
        let digits = candidate.chars().filter(char::is_ascii_digit).count();
        if !(7..=15).contains(&digits) {
            continue;
        }
        if YEAR_RANGE_RE.is_match(candidate) {
            continue;
        }
        return Some(candidate.to_string());
    }
    None
}

fn find_links(text: &str) -> Vec<String> {
    let mut links = Vec::new();
    for m in LINK_RE.find_iter(text) {
        let url = m.as_str().trim_end_matches(['.', ')', ']']).to_string();
        if url.contains('@') {
            continue; // email fragments caught by the generic URL arm
        }
        if !links.contains(&url) {
            links.push(url);
        }
    }
    links
}

/// The first non-empty line of the document, unless it is a section heading
/// or looks like contact data rather than a person's name.
fn find_name(full_text: &str) -> String {
    let Some(line) = full_text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return String::new();
    };
    if heading_kind(line).is_some() {
        return String::new();
    }
    if EMAIL_RE.is_match(line) || LINK_RE.is_match(line) {
        return String::new();
    }
    if find_phone(line).is_some() {
        return String::new();
    }
    if line.len() > 60 || line.split_whitespace().count() > 5 {
        return String::new();
    }
    line.to_string()
}

// ── Tests ──
