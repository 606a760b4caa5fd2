//! The single source of truth for per-field upload rules.
//!
//! Both the live (pre-submit) checks and the submission guard consult this
//! table, so the two layers cannot drift apart.

use api::FilePart;

pub const MAX_COMPANY_URLS: usize = 10;
pub const MIN_COMPANY_URLS: usize = 1;

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Resume,
    CareerGoals,
    LinkedinProfile,
    CompanyData,
    JobDescriptions,
    CompanyUrls,
}

impl FieldId {
    /// Field name as shown in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Resume => "Resume file",
            FieldId::CareerGoals => "Career goals",
            FieldId::LinkedinProfile => "LinkedIn profile file",
            FieldId::CompanyData => "Company data file",
            FieldId::JobDescriptions => "Job descriptions",
            FieldId::CompanyUrls => "Company URLs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    PlainText,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::PlainText => "TXT",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Pdf => ".pdf",
            FileKind::PlainText => ".txt",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::PlainText => "text/plain",
        }
    }

    /// Extension or media type indicates this kind.
    pub fn matches(&self, file: &FilePart) -> bool {
        file.mime == self.mime() || file.file_name.to_ascii_lowercase().ends_with(self.extension())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FileRule {
    pub kind: FileKind,
    pub max_bytes: u64,
}

impl FileRule {
    pub fn max_megabytes(&self) -> u64 {
        self.max_bytes / MB
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub min_chars: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    File(FileRule),
    Text(TextRule),
    UrlList { min: usize, max: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldConstraint {
    pub field: FieldId,
    pub rule: FieldRule,
}

pub const CONSTRAINTS: &[FieldConstraint] = &[
    FieldConstraint {
        field: FieldId::Resume,
        rule: FieldRule::File(FileRule {
            kind: FileKind::Pdf,
            max_bytes: 5 * MB,
        }),
    },
    FieldConstraint {
        field: FieldId::CareerGoals,
        rule: FieldRule::Text(TextRule {
            min_chars: 50,
            max_chars: 1000,
        }),
    },
    FieldConstraint {
        field: FieldId::LinkedinProfile,
        rule: FieldRule::File(FileRule {
            kind: FileKind::PlainText,
            max_bytes: 2 * MB,
        }),
    },
    FieldConstraint {
        field: FieldId::CompanyData,
        rule: FieldRule::File(FileRule {
            kind: FileKind::Pdf,
            max_bytes: 10 * MB,
        }),
    },
    FieldConstraint {
        field: FieldId::JobDescriptions,
        rule: FieldRule::Text(TextRule {
            min_chars: 100,
            max_chars: 5000,
        }),
    },
    FieldConstraint {
        field: FieldId::CompanyUrls,
        rule: FieldRule::UrlList {
            min: MIN_COMPANY_URLS,
            max: MAX_COMPANY_URLS,
        },
    },
];

pub fn constraint_for(field: FieldId) -> &'static FieldConstraint {
    // The table covers every FieldId; a miss is a programming error caught in tests.
    CONSTRAINTS
        .iter()
        .find(|c| c.field == field)
        .unwrap_or(&CONSTRAINTS[0])
}

/// File rule for a field, if it is a file slot.
pub fn file_rule(field: FieldId) -> Option<FileRule> {
    match constraint_for(field).rule {
        FieldRule::File(rule) => Some(rule),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> FilePart {
        FilePart {
            file_name: name.to_string(),
            mime: mime.to_string(),
            bytes: Vec::new(),
        }
    }

    #[test]
    fn every_field_has_exactly_one_constraint() {
        for field in [
            FieldId::Resume,
            FieldId::CareerGoals,
            FieldId::LinkedinProfile,
            FieldId::CompanyData,
            FieldId::JobDescriptions,
            FieldId::CompanyUrls,
        ] {
            let count = CONSTRAINTS.iter().filter(|c| c.field == field).count();
            assert_eq!(count, 1, "{field:?} should appear once in the table");
        }
    }

    #[test]
    fn kind_matches_by_extension_or_mime() {
        assert!(FileKind::Pdf.matches(&file("resume.PDF", "application/octet-stream")));
        assert!(FileKind::Pdf.matches(&file("resume", "application/pdf")));
        assert!(!FileKind::Pdf.matches(&file("resume.docx", "application/msword")));
        assert!(FileKind::PlainText.matches(&file("profile.txt", "")));
    }

    #[test]
    fn size_ceilings_match_the_field_rules() {
        assert_eq!(file_rule(FieldId::Resume).map(|r| r.max_megabytes()), Some(5));
        assert_eq!(
            file_rule(FieldId::LinkedinProfile).map(|r| r.max_megabytes()),
            Some(2)
        );
        assert_eq!(
            file_rule(FieldId::CompanyData).map(|r| r.max_megabytes()),
            Some(10)
        );
        assert!(file_rule(FieldId::CareerGoals).is_none());
    }
}
