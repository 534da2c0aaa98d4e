use chrono::NaiveDate;
use serde::Deserialize;

/// One person block of a `.feedback` file, as written on disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonForm {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// A parsed `.feedback` file. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackForm {
    pub source: String,
    pub reviewer: PersonForm,
    pub reviewee: PersonForm,
    pub date: String, // DD/MM/YYYY
    pub comments: String,
}

/// Forms accepted by a loader, plus how many candidate files it looked at
#[derive(Debug, Clone, Default)]
pub struct LoadedForms {
    pub forms: Vec<FeedbackForm>,
    pub candidates: usize,
}

/// Image data and profile link for a single person
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub data_uri: String,
    /// Empty when the person has no identifier
    pub profile_link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub name: String,
    pub role: String,
    pub profile_link: String,
    pub profile_image: String,
}

impl PersonRecord {
    pub fn has_profile_link(&self) -> bool {
        !self.profile_link.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub reviewer: PersonRecord,
    pub reviewee: PersonRecord,
    pub date: NaiveDate,
    pub date_label: String,
    /// Comment text with line breaks already turned into markup
    pub comments: String,
    pub sentiment: f64,
}

/// Counts reported once the output file is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub included: usize,
    pub candidates: usize,
}

impl ReportSummary {
    pub fn missing(&self) -> usize {
        self.candidates.saturating_sub(self.included)
    }
}
