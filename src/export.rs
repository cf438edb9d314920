use crate::error::ParseError;
use crate::record::{EducationEntry, ExperienceEntry, ResumeRecord};

/// Delimiter between flattened list items in a CSV cell.
const LIST_SEP: &str = "; ";

pub fn to_json(record: &ResumeRecord) -> Result<String, ParseError> {
    serde_json::to_string_pretty(record).map_err(|e| ParseError::Serialization(e.to_string()))
}

pub fn to_json_many(records: &[ResumeRecord]) -> Result<String, ParseError> {
    serde_json::to_string_pretty(records).map_err(|e| ParseError::Serialization(e.to_string()))
}

/// One CSV row per record. Flattening rule (fixed so round-trips are
/// predictable): list fields are joined with `"; "`; an education entry
/// renders as `degree, institution, dates` with empty parts dropped; an
/// experience entry renders as `title — organization (dates)`; newlines in
/// the summary become spaces.
pub fn to_csv(records: &[ResumeRecord]) -> Result<String, ParseError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "source",
            "name",
            "email",
            "phone",
            "links",
            "summary",
            "skills",
            "education",
            "experience",
        ])
        .map_err(|e| ParseError::Serialization(e.to_string()))?;

    for r in records {
        let education = r
            .education
            .iter()
            .map(flatten_education)
            .collect::<Vec<_>>()
            .join(LIST_SEP);
        let experience = r
            .experience
            .iter()
            .map(flatten_experience)
            .collect::<Vec<_>>()
            .join(LIST_SEP);
        let links = r.contact.links.join(LIST_SEP);
        let summary = r.summary.replace('\n', " ");
        let skills = r.skills.join(LIST_SEP);
        writer
            .write_record([
                r.source.as_str(),
                r.contact.name.as_str(),
                r.contact.email.as_str(),
                r.contact.phone.as_str(),
                links.as_str(),
                summary.as_str(),
                skills.as_str(),
                education.as_str(),
                experience.as_str(),
            ])
            .map_err(|e| ParseError::Serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ParseError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ParseError::Serialization(e.to_string()))
}

fn flatten_education(e: &EducationEntry) -> String {
    [&e.degree, &e.institution, &e.dates]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn flatten_experience(e: &ExperienceEntry) -> String {
    let mut out = e.title.clone();
    if !e.organization.is_empty() {
        out.push_str(" — ");
        out.push_str(&e.organization);
    }
    if !e.dates.is_empty() {
        out.push_str(" (");
        out.push_str(&e.dates);
        out.push(')');
    }
    out
}

// ── Tests ──
