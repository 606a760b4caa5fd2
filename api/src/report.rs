//! Canonical shape of a fetched compatibility report.
//!
//! The service wraps the report body in an `{analysis_id, status, data}`
//! envelope; the client flattens that into [`AnalysisReport`] so the UI only
//! ever sees one shape. Every section defaults to empty because older
//! analyses omit `company_culture` and `analysis_summary`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub compatibility_score: CompatibilityScore,
    #[serde(default)]
    pub skill_alignment: SkillAlignment,
    #[serde(default)]
    pub student_intents: StudentIntents,
    #[serde(default)]
    pub company_culture: CompanyCulture,
    #[serde(default)]
    pub counseling_report: CounselingReport,
    #[serde(default)]
    pub input_data: InputData,
    #[serde(default)]
    pub analysis_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    #[serde(default)]
    pub overall_score: u32,
    #[serde(default)]
    pub intent_alignment: u32,
    #[serde(default)]
    pub skill_match: u32,
    #[serde(default)]
    pub cultural_fit: u32,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl CompatibilityScore {
    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }

    pub fn confidence(&self) -> Option<&str> {
        self.metadata_str("confidence")
    }

    pub fn analysis_version(&self) -> Option<&str> {
        self.metadata_str("analysis_version")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAlignment {
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    #[serde(default)]
    pub transferable_skills: Vec<String>,
    #[serde(default)]
    pub hidden_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentIntents {
    #[serde(default)]
    pub desired_industries: Vec<String>,
    #[serde(default)]
    pub preferred_culture: Vec<String>,
    #[serde(default)]
    pub work_preferences: Vec<String>,
    #[serde(default)]
    pub learning_goals: Vec<String>,
    #[serde(default)]
    pub career_aspirations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyCulture {
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub work_life_balance: String,
    #[serde(default)]
    pub learning_support: Vec<String>,
    #[serde(default)]
    pub team_culture: String,
    #[serde(default)]
    pub company_size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounselingReport {
    #[serde(default)]
    pub match_reasoning: String,
    #[serde(default)]
    pub actionable_advice: Vec<String>,
    #[serde(default)]
    pub alternative_suggestions: Vec<String>,
    #[serde(default)]
    pub skill_development_plan: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub job_descriptions: String,
    #[serde(default)]
    pub company_urls: Vec<String>,
}

/// Wire envelope returned by `GET /analysis/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisEnvelope {
    pub analysis_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: ReportBody,
}

/// Report sections as they appear inside the envelope's `data` field.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportBody {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub compatibility_score: CompatibilityScore,
    #[serde(default)]
    pub skill_alignment: SkillAlignment,
    #[serde(default)]
    pub student_intents: StudentIntents,
    #[serde(default)]
    pub company_culture: CompanyCulture,
    #[serde(default)]
    pub counseling_report: CounselingReport,
    #[serde(default)]
    pub input_data: InputData,
    #[serde(default)]
    pub analysis_summary: String,
}

impl AnalysisEnvelope {
    pub(crate) fn flatten(self) -> AnalysisReport {
        let AnalysisEnvelope {
            analysis_id,
            status,
            data,
        } = self;
        AnalysisReport {
            analysis_id,
            status,
            created_at: data.created_at,
            compatibility_score: data.compatibility_score,
            skill_alignment: data.skill_alignment,
            student_intents: data.student_intents,
            company_culture: data.company_culture,
            counseling_report: data.counseling_report,
            input_data: data.input_data,
            analysis_summary: data.analysis_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_flattens_into_canonical_report() {
        let json = r#"{
            "analysis_id": "abc-123",
            "status": "completed",
            "data": {
                "created_at": "2025-06-20T10:30:00Z",
                "compatibility_score": {
                    "overall_score": 82,
                    "intent_alignment": 75,
                    "skill_match": 88,
                    "cultural_fit": 79,
                    "metadata": {"confidence": "high", "analysis_version": "2.1"}
                },
                "skill_alignment": {
                    "matched_skills": ["Rust", "SQL"],
                    "skill_gaps": [],
                    "transferable_skills": ["Teaching"],
                    "hidden_opportunities": ["Developer relations"]
                },
                "analysis_summary": "Strong technical match."
            }
        }"#;

        let envelope: AnalysisEnvelope = serde_json::from_str(json).expect("envelope parses");
        let report = envelope.flatten();

        assert_eq!(report.analysis_id, "abc-123");
        assert_eq!(report.status, "completed");
        assert_eq!(report.compatibility_score.overall_score, 82);
        assert_eq!(report.compatibility_score.confidence(), Some("high"));
        assert_eq!(report.compatibility_score.analysis_version(), Some("2.1"));
        assert_eq!(report.skill_alignment.matched_skills.len(), 2);
        assert_eq!(report.analysis_summary, "Strong technical match.");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        // Older analyses omit company_culture and analysis_summary entirely.
        let json = r#"{"analysis_id": "legacy-1", "status": "completed", "data": {}}"#;
        let report: AnalysisReport = serde_json::from_str::<AnalysisEnvelope>(json)
            .expect("envelope parses")
            .flatten();

        assert_eq!(report.compatibility_score.overall_score, 0);
        assert!(report.company_culture.values.is_empty());
        assert!(report.analysis_summary.is_empty());
        assert_eq!(report.compatibility_score.confidence(), None);
    }
}
