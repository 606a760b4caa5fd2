//! Chart projections derived from a fetched report.
//!
//! Every series is recomputed from the immutable report on each render.
//! The proficiency and progress magnitudes are display-only filler; they
//! take the RNG as an argument so views can pass `thread_rng()` while tests
//! seed a deterministic generator.

use std::f64::consts::PI;

use api::report::CompatibilityScore;
use dioxus::prelude::*;
use rand::Rng;

const BREAKDOWN_COLORS: [&str; 4] = [
    "rgba(66, 133, 244, 0.8)",
    "rgba(158, 158, 158, 0.8)",
    "rgba(52, 168, 83, 0.8)",
    "rgba(52, 168, 83, 0.8)",
];

const INDUSTRY_COLORS: [&str; 5] = ["#8B5CF6", "#06B6D4", "#F97316", "#FACC15", "#34D399"];

const SKILL_COLORS: [&str; 3] = [
    "rgba(255, 107, 107, 0.8)",
    "rgba(66, 133, 244, 0.8)",
    "rgba(6, 182, 212, 0.8)",
];

const PROGRESS_COLOR: &str = "rgba(139, 92, 246, 0.8)";

/// One labeled, colored magnitude in a series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
    pub color: &'static str,
}

/// An ordered projection of report values for one chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

/// Four fixed categories mapped 1:1 onto the report's scores; a missing
/// score renders as zero.
pub fn compatibility_breakdown(score: &CompatibilityScore) -> ChartSeries {
    let values = [
        ("Overall Score", score.overall_score),
        ("Intent Alignment", score.intent_alignment),
        ("Skill Match", score.skill_match),
        ("Cultural Fit", score.cultural_fit),
    ];

    ChartSeries {
        points: values
            .into_iter()
            .zip(BREAKDOWN_COLORS)
            .map(|((label, value), color)| ChartPoint {
                label: label.to_string(),
                value,
                color,
            })
            .collect(),
    }
}

/// One slice per desired industry, weighted equally (`100 / count`,
/// rounded). A visual placeholder, not a true weighting.
pub fn industry_distribution(industries: &[String]) -> ChartSeries {
    if industries.is_empty() {
        return ChartSeries::default();
    }

    let share = (100.0 / industries.len() as f64).round() as u32;
    ChartSeries {
        points: industries
            .iter()
            .enumerate()
            .map(|(index, label)| ChartPoint {
                label: label.clone(),
                value: share,
                color: INDUSTRY_COLORS[index % INDUSTRY_COLORS.len()],
            })
            .collect(),
    }
}

/// One bar per matched skill; magnitude is filler in [50, 100], fresh on
/// every render.
pub fn skill_proficiency(skills: &[String], rng: &mut impl Rng) -> ChartSeries {
    ChartSeries {
        points: skills
            .iter()
            .enumerate()
            .map(|(index, label)| ChartPoint {
                label: label.clone(),
                value: rng.gen_range(50..=100),
                color: SKILL_COLORS[index % SKILL_COLORS.len()],
            })
            .collect(),
    }
}

/// One row per learning goal; percentage is filler in [60, 100] per render.
pub fn goal_progress(goals: &[String], rng: &mut impl Rng) -> ChartSeries {
    ChartSeries {
        points: goals
            .iter()
            .map(|label| ChartPoint {
                label: label.clone(),
                value: rng.gen_range(60..=100),
                color: PROGRESS_COLOR,
            })
            .collect(),
    }
}

#[component]
pub fn BreakdownChart(series: ChartSeries) -> Element {
    rsx! {
        div { class: "chart chart--columns",
            for point in series.points.iter() {
                div { key: "{point.label}", class: "chart__column",
                    div { class: "chart__column-track",
                        div {
                            class: "chart__column-fill",
                            style: "height: {point.value}%; background: {point.color};",
                        }
                    }
                    span { class: "chart__value", "{point.value}%" }
                    span { class: "chart__label", "{point.label}" }
                }
            }
        }
    }
}

#[component]
pub fn DoughnutChart(series: ChartSeries) -> Element {
    let total: u32 = series.points.iter().map(|p| p.value).sum();
    let radius = 45.0_f64;
    let circumference = 2.0 * PI * radius;

    let mut offset = 0.0_f64;
    let slices: Vec<(String, &'static str, String, String)> = series
        .points
        .iter()
        .map(|point| {
            let fraction = if total == 0 {
                0.0
            } else {
                point.value as f64 / total as f64
            };
            let length = fraction * circumference;
            let dasharray = format!("{length:.2} {:.2}", circumference - length);
            let dashoffset = format!("{:.2}", -offset);
            offset += length;
            (point.label.clone(), point.color, dasharray, dashoffset)
        })
        .collect();

    rsx! {
        div { class: "chart chart--doughnut",
            svg {
                view_box: "0 0 120 120",
                class: "chart__doughnut-svg",
                for (label, color, dasharray, dashoffset) in slices.into_iter() {
                    circle {
                        key: "{label}",
                        cx: "60",
                        cy: "60",
                        r: "45",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "18",
                        stroke_dasharray: "{dasharray}",
                        stroke_dashoffset: "{dashoffset}",
                        transform: "rotate(-90 60 60)",
                    }
                }
            }
            ul { class: "chart__legend",
                for point in series.points.iter() {
                    li { key: "{point.label}", class: "chart__legend-item",
                        span {
                            class: "chart__legend-dot",
                            style: "background: {point.color};",
                        }
                        span { "{point.label}: {point.value}%" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BarList(series: ChartSeries) -> Element {
    rsx! {
        div { class: "chart chart--bars",
            for point in series.points.iter() {
                div { key: "{point.label}", class: "chart__bar-row",
                    span { class: "chart__label", "{point.label}" }
                    div { class: "chart__bar-track",
                        div {
                            class: "chart__bar-fill",
                            style: "width: {point.value}%; background: {point.color};",
                        }
                    }
                    span { class: "chart__value", "{point.value}%" }
                }
            }
        }
    }
}
