pub mod contact;
pub mod education;
pub mod experience;
pub mod skills;
pub mod summary;

use super::sections::Section;
use crate::record::ResumeRecord;

/// Merge all extractor outputs into one record. Pure field assignment; the
/// typed section list cannot be malformed, so this never fails — missing
/// fields are empty values.
pub fn extract_all(
    source: &str,
    full_text: &str,
    sections: &[Section],
    skill_phrases: &[String],
) -> ResumeRecord {
    ResumeRecord {
        source: source.to_string(),
        contact: contact::extract(full_text, sections),
        summary: summary::extract(sections),
        skills: skills::extract(full_text, sections, skill_phrases),
        education: education::extract(sections),
        experience: experience::extract(sections),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clean::clean;
    use crate::parser::sections::split_sections;

    fn defaults() -> Vec<String> {
        skills::DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    }

    fn parse_fixture(name: &str) -> ResumeRecord {
        let raw = std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap();
        let cleaned = clean(&raw);
        let sections = split_sections(&cleaned);
        extract_all(name, &cleaned, &sections, &defaults())
    }

    #[test]
    fn john_doe_record() {
        let r = parse_fixture("john_doe");
        assert_eq!(r.contact.name, "John Doe");
        assert_eq!(r.contact.email, "john@example.com");
        assert_eq!(r.contact.phone, "555-123-4567");
        assert_eq!(r.skills, vec!["Python", "SQL", "Machine Learning"]);
        assert_eq!(r.education.len(), 1);
        assert_eq!(r.education[0].degree, "B.S. Computer Science");
        assert_eq!(r.education[0].institution, "ABC University");
        assert_eq!(r.education[0].dates, "2018-2022");
    }

    #[test]
    fn jane_roe_record() {
        let r = parse_fixture("jane_roe");
        assert_eq!(r.contact.name, "Jane Roe");
        assert_eq!(r.contact.email, "jane.roe@mail.example.org");
        assert_eq!(r.contact.phone, "(415) 555-0199");
        assert_eq!(r.contact.links.len(), 2);
        assert!(r.summary.starts_with("Backend engineer"));
        assert_eq!(r.experience.len(), 2);
        assert_eq!(r.experience[0].organization, "Initech");
        assert_eq!(r.education.len(), 2);
        assert!(r.skills.contains(&"Kubernetes".to_string()));
        assert!(r.skills.contains(&"PostgreSQL".to_string()));
    }

    #[test]
    fn no_headings_still_yields_usable_record() {
        let r = parse_fixture("no_headings");
        assert_eq!(r.contact.name, "Taylor Morgan");
        assert_eq!(r.contact.email, "");
        assert_eq!(r.contact.phone, "");
        assert_eq!(r.summary, "");
        assert!(r.education.is_empty());
        assert!(r.experience.is_empty());
    }
}
