//! In-progress, unsubmitted form state.

use api::FilePart;
use url::Url;

use super::constraints::MAX_COMPANY_URLS;

/// The six fields of the upload form. Mutated only by the form controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    pub resume: Option<FilePart>,
    pub career_goals: String,
    pub linkedin_profile: Option<FilePart>,
    pub company_data: Option<FilePart>,
    pub job_descriptions: String,
    pub company_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlListError {
    Empty,
    Malformed,
    Duplicate,
    AtCapacity,
}

impl UrlListError {
    pub fn message(&self) -> &'static str {
        match self {
            UrlListError::Empty => "Please enter a URL",
            UrlListError::Malformed => {
                "Please enter a valid URL (must start with http:// or https://)"
            }
            UrlListError::Duplicate => "This URL has already been added",
            UrlListError::AtCapacity => "Maximum 10 URLs allowed",
        }
    }
}

/// A URL is acceptable when it parses as absolute with an explicit
/// http/https scheme.
pub fn is_well_formed_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

impl UploadDraft {
    /// Append a company URL, preserving insertion order. Rejects empty,
    /// malformed, and duplicate entries, and anything past the capacity of
    /// ten; the list is left untouched on any rejection.
    pub fn add_company_url(&mut self, raw: &str) -> Result<(), UrlListError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UrlListError::Empty);
        }
        if !is_well_formed_url(trimmed) {
            return Err(UrlListError::Malformed);
        }
        if self.company_urls.iter().any(|url| url == trimmed) {
            return Err(UrlListError::Duplicate);
        }
        if self.company_urls.len() >= MAX_COMPANY_URLS {
            return Err(UrlListError::AtCapacity);
        }

        self.company_urls.push(trimmed.to_string());
        Ok(())
    }

    /// Remove by exact match; relative order of the remainder is preserved.
    /// Removing an absent URL is a no-op.
    pub fn remove_company_url(&mut self, url: &str) {
        self.company_urls.retain(|entry| entry != url);
    }
}
