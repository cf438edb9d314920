use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{Section, SectionKind};

/// Curated skill phrases in canonical casing. Overridable from the CLI with
/// a one-phrase-per-line file; matching is case-insensitive either way.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python", "Java", "C++", "C#", "JavaScript", "TypeScript", "Rust", "Go",
    "Scala", "Ruby", "PHP", "Kotlin", "Swift", "R", "SQL", "PostgreSQL",
    "MySQL", "MongoDB", "Redis", "SQLite", "React", "Angular", "Vue",
    "Node.js", "Django", "Flask", "Spring", "Rails", "HTML", "CSS", "REST",
    "GraphQL", "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform",
    "CI/CD", "Git", "Linux", "Bash", "Spark", "Hadoop", "Kafka", "Airflow",
    "NLP", "Machine Learning", "Deep Learning", "Computer Vision",
    "Data Analysis", "Data Engineering", "spaCy", "Pandas", "NumPy",
    "TensorFlow", "PyTorch", "scikit-learn", "Excel", "Tableau", "Power BI",
];

static DELIM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|•·▪◦]+|\s+[-–—]\s+").unwrap());

/// Phrase-list lookup over the skills section (full text when the resume
/// has no skills section). Longest phrase wins on overlaps, output keeps
/// canonical list casing, is deduplicated, and is ordered by first
/// occurrence. When a skills section exists but yields no phrase hits, its
/// content is split on common delimiters instead.
pub fn extract(full_text: &str, sections: &[Section], phrases: &[String]) -> Vec<String> {
    let skill_sections: Vec<&Section> = sections
        .iter()
        .filter(|s| s.kind == SectionKind::Skills)
        .collect();

    let scope: String = if skill_sections.is_empty() {
        full_text.to_string()
    } else {
        skill_sections
            .iter()
            .flat_map(|s| s.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let matched = match_phrases(&scope, phrases);
    if !matched.is_empty() {
        return matched;
    }
    if !skill_sections.is_empty() {
        return split_delimited(&scope);
    }
    Vec::new()
}

/// Case-insensitive longest-phrase-first matching with occupied-span
/// tracking, so "machine learning" claims its characters before any shorter
/// phrase can match inside them.
fn match_phrases(text: &str, phrases: &[String]) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut order: Vec<usize> = (0..phrases.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(phrases[i].len()));

    let mut occupied: Vec<(usize, usize)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut found: Vec<(usize, &str)> = Vec::new();

    for i in order {
        let phrase = phrases[i].trim();
        if phrase.is_empty() {
            continue;
        }
        let needle = phrase.to_lowercase();
        if seen.contains(&needle) {
            continue;
        }

        let mut first_pos: Option<usize> = None;
        for (pos, _) in haystack.match_indices(&needle) {
            let end = pos + needle.len();
            if occupied.iter().any(|&(s, e)| pos < e && s < end) {
                continue;
            }
            if !on_word_boundary(&haystack, pos, end) {
                continue;
            }
            occupied.push((pos, end));
            first_pos.get_or_insert(pos);
        }
        if let Some(pos) = first_pos {
            seen.insert(needle);
            found.push((pos, phrase));
        }
    }

    found.sort_by_key(|&(pos, _)| pos);
    found.into_iter().map(|(_, p)| p.to_string()).collect()
}

fn on_word_boundary(haystack: &str, start: usize, end: usize) -> bool {
    let before_ok = haystack[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = haystack[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

/// Fallback for skills sections written with terms outside the phrase list:
/// split on commas, bullets, pipes, and similar delimiters.
fn split_delimited(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for line in text.lines() {
        let line = line.trim().trim_start_matches(['-', '*', '•', '·']).trim();
        for token in DELIM_RE.split(line) {
            let token = token.trim();
            if token.is_empty() || token.len() > 40 {
                continue;
            }
            if seen.insert(token.to_lowercase()) {
                out.push(token.to_string());
            }
        }
    }
    out
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::split_sections;

    fn defaults() -> Vec<String> {
        DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    }

    fn skills_of(text: &str) -> Vec<String> {
        extract(text, &split_sections(text), &defaults())
    }

    #[test]
    fn scenario_ordering_and_casing() {
        let s = skills_of("SKILLS\nPython, SQL, Machine Learning");
        assert_eq!(s, vec!["Python", "SQL", "Machine Learning"]);
    }

    #[test]
    fn deduplicates_repeated_phrases() {
        let s = skills_of("SKILLS\nPython, SQL, Python, python");
        assert_eq!(s, vec!["Python", "SQL"]);
    }

    #[test]
    fn longest_phrase_suppresses_substring() {
        // "JavaScript" must not additionally produce "Java"
        let s = skills_of("SKILLS\nJavaScript, Docker");
        assert_eq!(s, vec!["JavaScript", "Docker"]);
    }

    #[test]
    fn case_insensitive_with_canonical_output() {
        let s = skills_of("SKILLS\nPYTHON and machine learning");
        assert_eq!(s, vec!["Python", "Machine Learning"]);
    }

    #[test]
    fn full_text_scan_without_skills_section() {
        let s = skills_of("built services in Rust and deployed with Kubernetes");
        assert_eq!(s, vec!["Rust", "Kubernetes"]);
    }

    #[test]
    fn delimiter_fallback_when_no_phrase_matches() {
        let s = skills_of("SKILLS\nUnderwater Basket Weaving; Competitive Yodeling");
        assert_eq!(s, vec!["Underwater Basket Weaving", "Competitive Yodeling"]);
    }

    #[test]
    fn symbol_heavy_phrases() {
        let s = skills_of("SKILLS\nC++, C#, Node.js, CI/CD");
        assert_eq!(s, vec!["C++", "C#", "Node.js", "CI/CD"]);
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(skills_of("").is_empty());
    }
}
