use std::sync::LazyLock;

use regex::Regex;

use crate::parser::sections::{Section, SectionKind};
use crate::record::ExperienceEntry;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let month = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";
    let date = format!(r"(?:(?:{month}\s+)?(?:19|20)\d{{2}}|(?:0?[1-9]|1[0-2])/\d{{4}})");
    Regex::new(&format!(
        r"(?i)\b{date}\s*(?:[-–—]|to)\s*(?:{date}|present)\b"
    ))
    .unwrap()
});

/// Split the experience section into entries. A line carrying a date range
/// starts a new entry; blank lines close the current one; everything else
/// accumulates as free-text description.
pub fn extract(sections: &[Section]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();

    for section in sections.iter().filter(|s| s.kind == SectionKind::Experience) {
        let mut current: Option<ExperienceEntry> = None;

        for line in &section.lines {
            let line = line.trim();
            if line.is_empty() {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
                continue;
            }

            if let Some(m) = RANGE_RE.find(line) {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
                let header = format!("{}{}", &line[..m.start()], &line[m.end()..]);
                let (title, organization) = split_header(&header);
                current = Some(ExperienceEntry {
                    title,
                    organization,
                    dates: m.as_str().to_string(),
                    description: Vec::new(),
                });
            } else if let Some(entry) = current.as_mut() {
                entry.description.push(strip_bullet(line).to_string());
            } else {
                // leading line with no date: treat as a title/organization header
                let (title, organization) = split_header(line);
                current = Some(ExperienceEntry {
                    title,
                    organization,
                    dates: String::new(),
                    description: Vec::new(),
                });
            }
        }

        if let Some(entry) = current.take() {
            entries.push(entry);
        }
    }

    entries
}

/// "Senior Engineer at Initech" / "Senior Engineer — Initech" / "Senior
/// Engineer, Initech" all split into (title, organization); anything else
/// stays whole as the title.
fn split_header(header: &str) -> (String, String) {
    let header = header
        .trim()
        .trim_matches(|c: char| matches!(c, '|' | ',' | '-' | '–' | '—' | '(' | ')'))
        .trim();
    for sep in [" at ", " @ ", " — ", " – ", " | ", " - ", ", "] {
        if let Some((title, organization)) = header.split_once(sep) {
            return (title.trim().to_string(), organization.trim().to_string());
        }
    }
    (header.to_string(), String::new())
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '*', '•', '·', '▪']).trim()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::split_sections;

    fn experience_of(text: &str) -> Vec<ExperienceEntry> {
        extract(&split_sections(text))
    }

    #[test]
    fn dated_entries_with_descriptions() {
        let text = "EXPERIENCE\n\
            Senior Software Engineer at Initech, Jan 2019 - Present\n\
            - Led migration of the billing pipeline\n\
            - Mentored four junior engineers\n\
            \n\
            Software Engineer at Hooli, 2015 - 2018\n\
            - Built internal APIs";
        let e = experience_of(text);
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].title, "Senior Software Engineer");
        assert_eq!(e[0].organization, "Initech");
        assert_eq!(e[0].dates, "Jan 2019 - Present");
        assert_eq!(e[0].description.len(), 2);
        assert_eq!(e[1].dates, "2015 - 2018");
        assert_eq!(e[1].description, vec!["Built internal APIs"]);
    }

    #[test]
    fn blank_line_closes_entry() {
        let text = "EXPERIENCE\nConsultant, 2020-2021\n\nFreelancer, 2018-2019";
        let e = experience_of(text);
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].title, "Consultant");
        assert_eq!(e[1].title, "Freelancer");
    }

    #[test]
    fn dateless_header_still_captured() {
        let e = experience_of("EXPERIENCE\nBarista at Central Perk\nmade a lot of coffee");
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].title, "Barista");
        assert_eq!(e[0].organization, "Central Perk");
        assert_eq!(e[0].dates, "");
        assert_eq!(e[0].description, vec!["made a lot of coffee"]);
    }

    #[test]
    fn month_range_formats() {
        let e = experience_of("EXPERIENCE\nAnalyst at BigCo, March 2019 to October 2021");
        assert_eq!(e[0].dates, "March 2019 to October 2021");
    }

    #[test]
    fn numeric_month_range() {
        let e = experience_of("EXPERIENCE\nAnalyst at BigCo, 03/2019 - 10/2021");
        assert_eq!(e[0].dates, "03/2019 - 10/2021");
    }

    #[test]
    fn no_experience_section_yields_empty() {
        assert!(experience_of("just some text with 2019 - 2021 in it").is_empty());
    }
}
