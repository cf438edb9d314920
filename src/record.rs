use serde::{Deserialize, Serialize};

/// Structured result of parsing one resume. Built once by the assembler,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub source: String,
    pub contact: Contact,
    pub summary: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// LinkedIn/GitHub/other profile URLs, in order of appearance.
    pub links: Vec<String>,
}

/// One education line. Any field may be empty; an entry without a degree
/// keyword is still kept when an institution and a date range were found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub dates: String,
    pub description: Vec<String>,
}
