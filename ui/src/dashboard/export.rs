//! Plain-text report export.
//!
//! The report body is built deterministically from the fetched analysis and
//! the current timestamp, then delivered as a browser download on web or
//! written under the app data directory on desktop.

use api::AnalysisReport;
use dioxus::prelude::*;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::platform;

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

const NEXT_STEPS: &str = "\
1. IMMEDIATE ACTIONS (Next 1–2 weeks):
   • Review the skill gaps and prioritize the most critical ones
   • Start researching learning resources for your identified learning goals
   • Begin networking with professionals in your target industries

2. SHORT-TERM GOALS (Next 1–3 months):
   • Enroll in courses or bootcamps for your priority skills
   • Start building projects to demonstrate your capabilities
   • Update your resume and LinkedIn profile with new skills

3. MEDIUM-TERM GOALS (Next 3–6 months):
   • Complete significant projects showcasing your improved skills
   • Apply for internships or entry-level positions
   • Seek mentorship from industry professionals

4. LONG-TERM GOALS (Next 6–12 months):
   • Target roles that align with your compatibility scores
   • Continue building your professional network
   • Regularly reassess and update your career goals";

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {item}", index + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn section(title: &str) -> String {
    format!("{RULE}\n\n{title}\n{RULE}")
}

/// Full report body. Pure: identical report + timestamp yield identical
/// bytes, so repeated downloads of the same analysis only differ in dates.
pub fn build_report_text(report: &AnalysisReport, generated: OffsetDateTime) -> String {
    let score = &report.compatibility_score;
    let skills = &report.skill_alignment;
    let intents = &report.student_intents;
    let culture = &report.company_culture;
    let counsel = &report.counseling_report;

    let long_date = generated
        .format(format_description!("[month repr:long] [day padding:none], [year]"))
        .unwrap_or_default();
    let iso = generated.format(&Rfc3339).unwrap_or_default();

    let career_goals = {
        let goals = report.input_data.career_goals.trim();
        if goals.is_empty() {
            "No specific career goals provided.".to_string()
        } else {
            goals.to_string()
        }
    };

    let skill_gaps = if skills.skill_gaps.is_empty() {
        "• No specific skill gaps identified".to_string()
    } else {
        bullets(&skills.skill_gaps)
    };

    let status = if report.status.is_empty() {
        "Completed"
    } else {
        report.status.as_str()
    };

    format!(
        "CAREER COMPATIBILITY ANALYSIS REPORT\n\
         Generated on: {long_date}\n\n\
         {summary_header}\n\n\
         Overall Compatibility Score: {overall}%\n\n\
         This report provides a comprehensive analysis of your career compatibility with the target company/role. The analysis evaluates your skills, career goals, and cultural preferences against the company's requirements and culture.\n\n\
         KEY METRICS:\n\
         • Overall Score: {overall}%\n\
         • Intent Alignment: {intent}%\n\
         • Skill Match: {skill}%\n\
         • Cultural Fit: {cultural}%\n\
         • Confidence Level: {confidence}\n\n\
         {profile_header}\n\n\
         CAREER GOALS:\n{career_goals}\n\n\
         DESIRED INDUSTRIES:\n{industries}\n\n\
         PREFERRED WORK CULTURE:\n{preferred_culture}\n\n\
         WORK PREFERENCES:\n{work_preferences}\n\n\
         LEARNING GOALS:\n{learning_goals}\n\n\
         CAREER ASPIRATIONS:\n{aspirations}\n\n\
         {skills_header}\n\n\
         MATCHED SKILLS ({matched_count} skills):\n{matched}\n\n\
         SKILL GAPS:\n{skill_gaps}\n\n\
         TRANSFERABLE SKILLS:\n{transferable}\n\n\
         HIDDEN OPPORTUNITIES:\n{hidden}\n\n\
         {culture_header}\n\n\
         COMPANY VALUES:\n{values}\n\n\
         WORK-LIFE BALANCE:\n{work_life}\n\n\
         LEARNING SUPPORT:\n{learning_support}\n\n\
         TEAM CULTURE:\n{team_culture}\n\n\
         COMPANY SIZE: {company_size}\n\n\
         {assessment_header}\n\n\
         MATCH REASONING:\n{reasoning}\n\n\
         ANALYSIS SUMMARY:\n{analysis_summary}\n\n\
         {plan_header}\n\n\
         IMMEDIATE ACTIONS:\n{advice}\n\n\
         ALTERNATIVE CAREER PATHS:\n{alternatives}\n\n\
         SKILL DEVELOPMENT ROADMAP:\n{roadmap}\n\n\
         {next_header}\n\n\
         {next_steps}\n\n\
         {metadata_header}\n\n\
         Analysis ID: {analysis_id}\n\
         Generated: {iso}\n\
         Analysis Version: {version}\n\
         Report Status: {status}\n\n\
         {rule}\n\n\
         This report is generated automatically based on your inputs and company data.\n\
         For personalized career counseling, consider consulting with a career advisor.\n\n\
         End of Report",
        summary_header = section("EXECUTIVE SUMMARY"),
        overall = score.overall_score,
        intent = score.intent_alignment,
        skill = score.skill_match,
        cultural = score.cultural_fit,
        confidence = score.confidence().unwrap_or("N/A"),
        profile_header = section("YOUR CAREER PROFILE"),
        industries = bullets(&intents.desired_industries),
        preferred_culture = bullets(&intents.preferred_culture),
        work_preferences = bullets(&intents.work_preferences),
        learning_goals = bullets(&intents.learning_goals),
        aspirations = bullets(&intents.career_aspirations),
        skills_header = section("SKILL ANALYSIS"),
        matched_count = skills.matched_skills.len(),
        matched = skills
            .matched_skills
            .iter()
            .map(|skill| format!("✓ {skill}"))
            .collect::<Vec<_>>()
            .join("\n"),
        transferable = bullets(&skills.transferable_skills),
        hidden = bullets(&skills.hidden_opportunities),
        culture_header = section("COMPANY CULTURE MATCH"),
        values = bullets(&culture.values),
        work_life = culture.work_life_balance,
        learning_support = bullets(&culture.learning_support),
        team_culture = culture.team_culture,
        company_size = culture.company_size,
        assessment_header = section("COMPATIBILITY ASSESSMENT"),
        reasoning = counsel.match_reasoning,
        analysis_summary = report.analysis_summary,
        plan_header = section("RECOMMENDATIONS & ACTION PLAN"),
        advice = numbered(&counsel.actionable_advice),
        alternatives = numbered(&counsel.alternative_suggestions),
        roadmap = numbered(&counsel.skill_development_plan),
        next_header = section("NEXT STEPS"),
        next_steps = NEXT_STEPS,
        metadata_header = section("REPORT METADATA"),
        analysis_id = report.analysis_id,
        version = score.analysis_version().unwrap_or("1.0"),
        rule = RULE,
    )
}

pub fn report_filename(analysis_id: &str, generated: OffsetDateTime) -> String {
    let date = generated
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default();
    format!("Career_Compatibility_Report_{analysis_id}_{date}.txt")
}

#[component]
pub fn ReportExportPanel(report: AnalysisReport) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("dashboard-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let download_handler = {
        let report = report.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing report"));
            let report = report.clone();
            platform::spawn_future(async move {
                // Brief pause so the preparing state is perceivable.
                platform::sleep_ms(1_000).await;
                match perform_report_download(&report).await {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { "Download Report" }
            }
            p { "Save the full analysis as a plain-text report you can share or archive." }
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy(),
                onclick: download_handler,
                "Download Full Report"
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

async fn perform_report_download(report: &AnalysisReport) -> Result<String, String> {
    let now = OffsetDateTime::now_utc();
    let text = build_report_text(report, now);
    let filename = report_filename(&report.analysis_id, now);
    let delivery = download_bytes(&filename, "text/plain", text.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("Report saved to {path}"),
        None => "Report download started".to_string(),
    })
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "MatchMind", "MatchMind")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::report::{CompatibilityScore, CounselingReport, SkillAlignment};
    use time::macros::datetime;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            analysis_id: "abc-123".to_string(),
            status: "completed".to_string(),
            compatibility_score: CompatibilityScore {
                overall_score: 82,
                intent_alignment: 75,
                skill_match: 88,
                cultural_fit: 79,
                metadata: serde_json::json!({"confidence": "high", "analysis_version": "2.1"}),
            },
            skill_alignment: SkillAlignment {
                matched_skills: vec!["Rust".to_string(), "SQL".to_string()],
                skill_gaps: Vec::new(),
                transferable_skills: vec!["Teaching".to_string()],
                hidden_opportunities: vec!["Developer relations".to_string()],
            },
            counseling_report: CounselingReport {
                match_reasoning: "Strong overlap on core skills.".to_string(),
                actionable_advice: vec![
                    "High priority - refresh your portfolio".to_string(),
                    "Practice system design interviews".to_string(),
                ],
                alternative_suggestions: vec!["Platform engineering".to_string()],
                skill_development_plan: vec!["Ship a distributed systems side project".to_string()],
            },
            analysis_summary: "Strong technical match.".to_string(),
            ..AnalysisReport::default()
        }
    }

    #[test]
    fn report_text_is_deterministic_for_fixed_timestamp() {
        let report = sample_report();
        let at = datetime!(2026-08-30 12:00 UTC);
        assert_eq!(
            build_report_text(&report, at),
            build_report_text(&report, at)
        );
    }

    #[test]
    fn report_text_carries_scores_and_metadata() {
        let text = build_report_text(&sample_report(), datetime!(2026-08-30 12:00 UTC));
        assert!(text.starts_with("CAREER COMPATIBILITY ANALYSIS REPORT"));
        assert!(text.contains("Generated on: August 30, 2026"));
        assert!(text.contains("Overall Compatibility Score: 82%"));
        assert!(text.contains("• Confidence Level: high"));
        assert!(text.contains("MATCHED SKILLS (2 skills):"));
        assert!(text.contains("✓ Rust"));
        assert!(text.contains("1. High priority - refresh your portfolio"));
        assert!(text.contains("Analysis ID: abc-123"));
        assert!(text.contains("Analysis Version: 2.1"));
        assert!(text.contains("Report Status: completed"));
        assert!(text.ends_with("End of Report"));
    }

    #[test]
    fn empty_sections_fall_back_to_placeholders() {
        let text = build_report_text(&AnalysisReport::default(), datetime!(2026-01-02 00:00 UTC));
        assert!(text.contains("No specific career goals provided."));
        assert!(text.contains("• No specific skill gaps identified"));
        assert!(text.contains("• Confidence Level: N/A"));
        assert!(text.contains("Analysis Version: 1.0"));
        assert!(text.contains("Report Status: Completed"));
    }

    #[test]
    fn filename_embeds_id_and_iso_date() {
        let name = report_filename("abc-123", datetime!(2026-08-30 12:00 UTC));
        assert_eq!(name, "Career_Compatibility_Report_abc-123_2026-08-30.txt");
    }
}
