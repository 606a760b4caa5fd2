//! Dashboard page: fetches one analysis and renders every report section.
//!
//! The fetch runs once per `analysis_id`; a failed fetch is terminal for the
//! page and the user is pointed back to the upload form.

use api::AnalysisReport;
use dioxus::prelude::*;
use rand::thread_rng;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::core::config;

use super::advice::AdviceItem;
use super::charts::{
    self, BarList, BreakdownChart, DoughnutChart,
};
use super::export::ReportExportPanel;

/// Company URLs occasionally arrive still wrapped in JSON punctuation.
fn clean_url(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Short human date from the report's RFC 3339 `created_at`; falls back to
/// the raw value when it does not parse.
fn format_report_date(created_at: &str) -> String {
    OffsetDateTime::parse(created_at, &Rfc3339)
        .ok()
        .and_then(|dt| {
            dt.format(format_description!("[month repr:short] [day padding:none], [year]"))
                .ok()
        })
        .unwrap_or_else(|| created_at.to_string())
}

#[component]
pub fn Dashboard(analysis_id: String) -> Element {
    let resource = use_resource(move || {
        let id = analysis_id.clone();
        async move { config::api_client().fetch_analysis(&id).await }
    });

    match &*resource.read_unchecked() {
        None => rsx! {
            section { class: "page dashboard",
                div { class: "dashboard-card dashboard-card--status",
                    h1 { "Loading your analysis…" }
                    p { "Fetching the compatibility report from the analysis service." }
                }
            }
        },
        Some(Err(err)) => rsx! {
            section { class: "page dashboard",
                div { class: "dashboard-card dashboard-card--status dashboard-card--error",
                    h1 { "Analysis unavailable" }
                    p { "{err}" }
                    p { "Try submitting your data again from the upload page." }
                }
            }
        },
        Some(Ok(report)) => rsx! {
            ReportView { report: report.clone() }
        },
    }
}

#[component]
fn ReportView(report: AnalysisReport) -> Element {
    let score = report.compatibility_score.clone();
    let breakdown = charts::compatibility_breakdown(&score);
    let industries = charts::industry_distribution(&report.student_intents.desired_industries);

    // Filler magnitudes regenerate on every render.
    let mut rng = thread_rng();
    let proficiency = charts::skill_proficiency(&report.skill_alignment.matched_skills, &mut rng);
    let progress = charts::goal_progress(&report.student_intents.learning_goals, &mut rng);

    let advice_date = format_report_date(&report.created_at);
    let steps: Vec<(String, String, AdviceItem)> = report
        .counseling_report
        .actionable_advice
        .iter()
        .map(|raw| {
            let item = AdviceItem::parse(raw);
            let class = format!("stepper__step {}", item.priority.status_class());
            let meta = format!("{} priority · {}", item.priority.label(), advice_date);
            (class, meta, item)
        })
        .collect();
    let advice_count = steps.len();

    let urls: Vec<String> = report
        .input_data
        .company_urls
        .iter()
        .map(|raw| clean_url(raw))
        .filter(|url| !url.is_empty())
        .collect();

    rsx! {
        section { class: "page dashboard",
            header { class: "dashboard__header",
                h1 { "Career Compatibility Dashboard" }
                p { class: "dashboard__subtitle",
                    "Analysis {report.analysis_id} · {report.status} · {advice_date}"
                }
            }

            div { class: "dashboard__metrics",
                MetricCard { label: "Overall Score", value: score.overall_score }
                MetricCard { label: "Intent Alignment", value: score.intent_alignment }
                MetricCard { label: "Skill Match", value: score.skill_match }
                MetricCard { label: "Cultural Fit", value: score.cultural_fit }
            }

            div { class: "dashboard__grid",
                section { class: "dashboard-card",
                    div { class: "dashboard-card__header", h2 { "Compatibility Breakdown" } }
                    BreakdownChart { series: breakdown }
                }

                section { class: "dashboard-card",
                    div { class: "dashboard-card__header", h2 { "Desired Industries" } }
                    if industries.points.is_empty() {
                        p { class: "dashboard-card__placeholder", "No desired industries were identified." }
                    } else {
                        DoughnutChart { series: industries }
                    }
                }

                section { class: "dashboard-card",
                    div { class: "dashboard-card__header", h2 { "Skill Proficiency" } }
                    if proficiency.points.is_empty() {
                        p { class: "dashboard-card__placeholder", "No matched skills were identified." }
                    } else {
                        BarList { series: proficiency }
                    }
                }

                section { class: "dashboard-card",
                    div { class: "dashboard-card__header", h2 { "Learning Goal Progress" } }
                    if progress.points.is_empty() {
                        p { class: "dashboard-card__placeholder", "No learning goals were identified." }
                    } else {
                        BarList { series: progress }
                    }
                }
            }

            section { class: "dashboard-card",
                div { class: "dashboard-card__header", h2 { "Skill Analysis" } }
                div { class: "dashboard__columns",
                    TagList { title: "Matched Skills", items: report.skill_alignment.matched_skills.clone() }
                    TagList { title: "Skill Gaps", items: report.skill_alignment.skill_gaps.clone() }
                    TagList { title: "Transferable Skills", items: report.skill_alignment.transferable_skills.clone() }
                    TagList { title: "Hidden Opportunities", items: report.skill_alignment.hidden_opportunities.clone() }
                }
            }

            section { class: "dashboard-card",
                div { class: "dashboard-card__header", h2 { "Company Culture" } }
                div { class: "dashboard__columns",
                    TagList { title: "Values", items: report.company_culture.values.clone() }
                    TagList { title: "Learning Support", items: report.company_culture.learning_support.clone() }
                }
                if !report.company_culture.work_life_balance.is_empty() {
                    p { strong { "Work-life balance: " } "{report.company_culture.work_life_balance}" }
                }
                if !report.company_culture.team_culture.is_empty() {
                    p { strong { "Team culture: " } "{report.company_culture.team_culture}" }
                }
                if !report.company_culture.company_size.is_empty() {
                    p { strong { "Company size: " } "{report.company_culture.company_size}" }
                }
            }

            section { class: "dashboard-card",
                div { class: "dashboard-card__header", h2 { "Counselor Assessment" } }
                if !report.counseling_report.match_reasoning.is_empty() {
                    p { "{report.counseling_report.match_reasoning}" }
                }
                if !report.analysis_summary.is_empty() {
                    p { class: "dashboard-card__meta", "{report.analysis_summary}" }
                }
                TagList { title: "Alternative Career Paths", items: report.counseling_report.alternative_suggestions.clone() }
                TagList { title: "Skill Development Plan", items: report.counseling_report.skill_development_plan.clone() }
            }

            section { class: "dashboard-card",
                div { class: "dashboard-card__header", h2 { "Actionable Advice" } }
                if steps.is_empty() {
                    p { class: "dashboard-card__placeholder", "No advice was generated for this analysis." }
                } else {
                    ol { class: "stepper",
                        for (index, (step_class, meta, item)) in steps.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "{step_class}",
                                div { class: "stepper__marker",
                                    span { class: "stepper__dot" }
                                    if index + 1 < advice_count {
                                        span { class: "stepper__line" }
                                    }
                                }
                                div { class: "stepper__body",
                                    span { class: "stepper__title", "{item.title}" }
                                    if let Some(description) = item.description.as_deref() {
                                        p { class: "stepper__description", "{description}" }
                                    }
                                    span { class: "stepper__meta", "{meta}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "dashboard-card",
                div { class: "dashboard-card__header", h2 { "Your Submission" } }
                if !report.input_data.career_goals.is_empty() {
                    p { strong { "Career goals: " } "{report.input_data.career_goals}" }
                }
                if !report.input_data.job_descriptions.is_empty() {
                    p { strong { "Job descriptions: " } "{report.input_data.job_descriptions}" }
                }
                if !urls.is_empty() {
                    h3 { class: "tag-list__title", "Analyzed Company Pages" }
                    ul { class: "dashboard__url-list",
                        for url in urls.iter() {
                            li { key: "{url}", "{url}" }
                        }
                    }
                }
            }

            ReportExportPanel { report: report.clone() }
        }
    }
}

#[component]
fn MetricCard(label: &'static str, value: u32) -> Element {
    let display = crate::core::format::format_percent(value);
    rsx! {
        div { class: "metric-card",
            span { class: "metric-card__value", "{display}" }
            span { class: "metric-card__label", "{label}" }
        }
    }
}

#[component]
fn TagList(title: &'static str, items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "tag-list",
            h3 { class: "tag-list__title", "{title}" }
            ul { class: "tag-list__items",
                for item in items.iter() {
                    li { key: "{item}", class: "tag-list__item", "{item}" }
                }
            }
        }
    }
}
