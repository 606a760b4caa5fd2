//! Draft validation and the submission guard.
//!
//! All field failures are collected, never short-circuited, so one submit
//! attempt reports every problem at once. `prepare_submission` is the only
//! path from a draft to a network payload: an invalid draft can never reach
//! the client.

use api::{FilePart, SubmissionParts};

use super::constraints::{self, FieldId, FieldRule, FileRule, TextRule};
use super::draft::{is_well_formed_url, UploadDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check one file slot against its rule. Used both by the live check when a
/// file is picked and by the full-draft validation below.
pub fn check_file(field: FieldId, file: Option<&FilePart>, rule: &FileRule) -> Option<FieldError> {
    let Some(file) = file else {
        return Some(FieldError::new(field, format!("{} is required", field.label())));
    };

    if !rule.kind.matches(file) {
        return Some(FieldError::new(
            field,
            format!("Only {} files are allowed", rule.kind.label()),
        ));
    }

    if file.size_bytes() > rule.max_bytes {
        return Some(FieldError::new(
            field,
            format!("File size must be less than {}MB", rule.max_megabytes()),
        ));
    }

    None
}

fn check_text(field: FieldId, value: &str, rule: &TextRule) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::new(field, format!("{} are required", field.label())));
    }

    let length = trimmed.chars().count();
    if length < rule.min_chars {
        return Some(FieldError::new(
            field,
            format!("{} must be at least {} characters", field.label(), rule.min_chars),
        ));
    }
    if length > rule.max_chars {
        return Some(FieldError::new(
            field,
            format!("{} must not exceed {} characters", field.label(), rule.max_chars),
        ));
    }

    None
}

fn check_urls(field: FieldId, urls: &[String], min: usize, max: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if urls.len() < min {
        errors.push(FieldError::new(field, "At least one company URL is required"));
    }
    if urls.len() > max {
        errors.push(FieldError::new(field, format!("Maximum {max} URLs allowed")));
    }

    for url in urls {
        if !is_well_formed_url(url) {
            errors.push(FieldError::new(field, format!("Invalid URL format: {url}")));
        }
    }

    let mut seen = std::collections::HashSet::new();
    for url in urls {
        if !seen.insert(url.as_str()) {
            errors.push(FieldError::new(field, format!("Duplicate URL: {url}")));
        }
    }

    errors
}

/// Evaluate every field rule independently and return the aggregated failures.
pub fn validate_draft(draft: &UploadDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for constraint in constraints::CONSTRAINTS {
        match &constraint.rule {
            FieldRule::File(rule) => {
                let file = match constraint.field {
                    FieldId::Resume => draft.resume.as_ref(),
                    FieldId::LinkedinProfile => draft.linkedin_profile.as_ref(),
                    FieldId::CompanyData => draft.company_data.as_ref(),
                    _ => None,
                };
                errors.extend(check_file(constraint.field, file, rule));
            }
            FieldRule::Text(rule) => {
                let value = match constraint.field {
                    FieldId::CareerGoals => draft.career_goals.as_str(),
                    FieldId::JobDescriptions => draft.job_descriptions.as_str(),
                    _ => "",
                };
                errors.extend(check_text(constraint.field, value, rule));
            }
            FieldRule::UrlList { min, max } => {
                errors.extend(check_urls(constraint.field, &draft.company_urls, *min, *max));
            }
        }
    }

    errors
}

/// The submission guard: re-validate the full draft, and only a clean draft
/// becomes a payload.
pub fn prepare_submission(draft: &UploadDraft) -> Result<SubmissionParts, Vec<FieldError>> {
    let errors = validate_draft(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Presence is guaranteed by validate_draft above.
    match (&draft.resume, &draft.linkedin_profile, &draft.company_data) {
        (Some(resume), Some(linkedin_profile), Some(company_data)) => Ok(SubmissionParts {
            resume: resume.clone(),
            linkedin_profile: linkedin_profile.clone(),
            company_data: company_data.clone(),
            career_goals: draft.career_goals.clone(),
            job_descriptions: draft.job_descriptions.clone(),
            company_urls: draft.company_urls.clone(),
        }),
        _ => Err(vec![FieldError::new(
            FieldId::Resume,
            "Resume file is required",
        )]),
    }
}
