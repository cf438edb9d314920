/// Fixed set of section labels. `Other` is the catch-all for the preamble
/// (usually name + contact lines) and anything under unrecognized headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Contact,
    Summary,
    Education,
    Experience,
    Skills,
    Other,
}

impl SectionKind {
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Contact => "contact",
            SectionKind::Summary => "summary",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Skills => "skills",
            SectionKind::Other => "other",
        }
    }

    /// Tie-break rank when a heading line matches keywords of equal length.
    fn rank(self) -> usize {
        match self {
            SectionKind::Contact => 0,
            SectionKind::Summary => 1,
            SectionKind::Education => 2,
            SectionKind::Experience => 3,
            SectionKind::Skills => 4,
            SectionKind::Other => 5,
        }
    }
}

/// A contiguous labeled block of resume lines. The heading line that opened
/// the section is kept separately so extractors see content only.
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

const HEADING_KEYWORDS: &[(&str, SectionKind)] = &[
    ("contact information", SectionKind::Contact),
    ("personal details", SectionKind::Contact),
    ("contact", SectionKind::Contact),
    ("professional summary", SectionKind::Summary),
    ("career objective", SectionKind::Summary),
    ("summary", SectionKind::Summary),
    ("objective", SectionKind::Summary),
    ("about me", SectionKind::Summary),
    ("about", SectionKind::Summary),
    ("profile", SectionKind::Summary),
    ("academic background", SectionKind::Education),
    ("education", SectionKind::Education),
    ("professional experience", SectionKind::Experience),
    ("work experience", SectionKind::Experience),
    ("employment history", SectionKind::Experience),
    ("work history", SectionKind::Experience),
    ("experience", SectionKind::Experience),
    ("technical skills", SectionKind::Skills),
    ("core competencies", SectionKind::Skills),
    ("skills", SectionKind::Skills),
];

/// Partition cleaned text into labeled sections. Every line of the input
/// lands in exactly one section; lines before the first heading form a
/// leading `Other` section. Never fails: with no recognizable headings the
/// result is a single `Other` section holding the whole text.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        kind: SectionKind::Other,
        heading: None,
        lines: Vec::new(),
    };

    for line in text.lines() {
        if let Some(kind) = heading_kind(line) {
            let next = Section {
                kind,
                heading: Some(line.to_string()),
                lines: Vec::new(),
            };
            if current.heading.is_some() || !current.lines.is_empty() {
                sections.push(std::mem::replace(&mut current, next));
            } else {
                // empty leading section: relabel instead of emitting it
                current = next;
            }
        } else {
            current.lines.push(line.to_string());
        }
    }

    if current.heading.is_some() || !current.lines.is_empty() {
        sections.push(current);
    }

    sections
}

/// Heading detection: the line must case-insensitively contain a known
/// keyword on word boundaries AND look like a heading (short, few words, no
/// terminal sentence punctuation; a trailing colon is fine). Ties between
/// matching keywords go to the longest keyword, then to the earlier category
/// in the fixed priority order contact < summary < education < experience <
/// skills.
pub fn heading_kind(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim().trim_end_matches(':').trim_end();
    if trimmed.is_empty() || trimmed.len() > 40 {
        return None;
    }
    if trimmed.split_whitespace().count() > 4 {
        return None;
    }
    if trimmed.ends_with(['.', ',', ';']) {
        return None;
    }

    let lower = trimmed.to_lowercase();
    let mut best: Option<(usize, usize, SectionKind)> = None; // (len, rank, kind)
    for &(keyword, kind) in HEADING_KEYWORDS {
        if !contains_phrase(&lower, keyword) {
            continue;
        }
        let is_better = match best {
            Some((len, rank, _)) => {
                keyword.len() > len || (keyword.len() == len && kind.rank() < rank)
            }
            None => true,
        };
        if is_better {
            best = Some((keyword.len(), kind.rank(), kind));
        }
    }
    best.map(|(_, _, kind)| kind)
}

/// Word-boundary containment: `needle` occurs in `haystack` with no
/// alphanumeric character directly before or after the match.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    for (pos, _) in haystack.match_indices(needle) {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[pos + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_headings_single_other() {
        let text = "Random paragraph\nthat matches nothing\n\nstill nothing";
        let sections = split_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Other);
        assert_eq!(sections[0].lines.join("\n"), text);
    }

    #[test]
    fn heading_starts_section() {
        let sections = split_sections("John Doe\n\nEDUCATION\nB.S. Computer Science");
        assert_eq!(
            sections.iter().map(|s| s.kind).collect::<Vec<_>>(),
            vec![SectionKind::Other, SectionKind::Education]
        );
        assert_eq!(sections[1].heading.as_deref(), Some("EDUCATION"));
        assert_eq!(sections[1].lines, vec!["B.S. Computer Science"]);
    }

    #[test]
    fn every_line_assigned_once() {
        let text = "John Doe\nSUMMARY\ngood engineer\n\nSKILLS\nPython\nEXPERIENCE\nAcme Corp";
        let sections = split_sections(text);
        let total: usize = sections
            .iter()
            .map(|s| s.lines.len() + usize::from(s.heading.is_some()))
            .sum();
        assert_eq!(total, text.lines().count());
    }

    #[test]
    fn multiword_headings() {
        assert_eq!(heading_kind("Work Experience"), Some(SectionKind::Experience));
        assert_eq!(heading_kind("TECHNICAL SKILLS"), Some(SectionKind::Skills));
        assert_eq!(heading_kind("Employment History:"), Some(SectionKind::Experience));
    }

    #[test]
    fn longest_keyword_wins() {
        assert_eq!(heading_kind("Professional Summary"), Some(SectionKind::Summary));
        assert_eq!(heading_kind("Contact Information"), Some(SectionKind::Contact));
    }

    #[test]
    fn long_or_punctuated_lines_are_not_headings() {
        assert_eq!(
            heading_kind("I have ten years of experience building systems"),
            None
        );
        assert_eq!(heading_kind("education, training and more."), None);
    }

    #[test]
    fn substring_does_not_match() {
        // "experienced" must not trip the "experience" keyword
        assert_eq!(heading_kind("Experienced Engineer"), None);
    }

    #[test]
    fn preamble_goes_to_other() {
        let sections = split_sections("Jane Roe\njane@example.com\n\nSKILLS\nRust");
        assert_eq!(sections[0].kind, SectionKind::Other);
        assert!(sections[0].heading.is_none());
        assert_eq!(sections[0].lines[0], "Jane Roe");
    }

    #[test]
    fn empty_input() {
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn john_doe_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/john_doe.txt").unwrap();
        let cleaned = crate::parser::clean::clean(&text);
        let kinds: Vec<_> = split_sections(&cleaned).iter().map(|s| s.kind).collect();
        assert_eq!(kinds[0], SectionKind::Other);
        assert!(kinds.contains(&SectionKind::Education));
        assert!(kinds.contains(&SectionKind::Skills));
    }
}
