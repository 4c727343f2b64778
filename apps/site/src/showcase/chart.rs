//! Skills chart — configuration for the horizontal bar chart on the skills section.
//!
//! The charting library runs in the browser; this module only produces the config object
//! it is drawn from. Tooltip callbacks cannot cross the wire, so the wrapped tooltip text
//! for every bar is rendered here and shipped alongside the data.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const TOOLTIP_WRAP_CHARS: usize = 30;
const ACCENT_FILL: &str = "rgba(13, 148, 136, 0.6)";
const ACCENT_BORDER: &str = "rgba(13, 148, 136, 1)";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";

/// Skill label and expertise percentage, in display order.
pub const AI_SKILLS: &[(&str, u8)] = &[
    ("Generative AI", 90),
    ("LLMs (GPT, Claude, Gemini)", 95),
    ("NLP", 80),
    ("Prompt Engineering", 95),
    ("Applied AI Prototyping", 85),
    ("Responsible AI Practices", 80),
];

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u8>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub index_axis: &'static str,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
    pub grid: Grid,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tooltip {
    /// One entry per bar: the wrapped lines of its tooltip label.
    pub lines: Vec<Vec<String>>,
}

/// Builds the bar chart config for a dataset label and `(skill, percent)` pairs.
pub fn skills_chart(dataset_label: &str, skills: &[(&str, u8)]) -> ChartConfig {
    let labels = skills.iter().map(|(name, _)| name.to_string()).collect();
    let data: Vec<u8> = skills.iter().map(|(_, pct)| *pct).collect();
    let lines = data
        .iter()
        .map(|&value| wrap_text(&tooltip_label(dataset_label, Some(value)), TOOLTIP_WRAP_CHARS))
        .collect();

    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: dataset_label.to_string(),
                data,
                background_color: ACCENT_FILL,
                border_color: ACCENT_BORDER,
                border_width: 1,
            }],
        },
        options: ChartOptions {
            index_axis: "y",
            responsive: true,
            maintain_aspect_ratio: false,
            scales: Scales {
                x: Axis {
                    begin_at_zero: Some(true),
                    max: Some(100),
                    grid: Grid {
                        color: Some(GRID_COLOR),
                        display: None,
                    },
                },
                y: Axis {
                    grid: Grid {
                        color: None,
                        display: Some(false),
                    },
                    ..Axis::default()
                },
            },
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: Tooltip { lines },
            },
        },
    }
}

pub fn ai_skills_chart() -> ChartConfig {
    skills_chart("AI Skill Focus", AI_SKILLS)
}

/// `"<label>: <value>% Expertise"`; the label prefix is dropped when empty.
pub fn tooltip_label(dataset_label: &str, value: Option<u8>) -> String {
    let mut label = String::new();
    if !dataset_label.is_empty() {
        label.push_str(dataset_label);
        label.push_str(": ");
    }
    if let Some(v) = value {
        label.push_str(&format!("{v}% Expertise"));
    }
    label
}

/// Greedy word wrap. A word starts a new line when the current line plus the word would
/// exceed `max_chars`. The first line comes back empty when the first word alone is too long.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.chars().count() + word.chars().count() > max_chars {
            lines.push(current.trim().to_string());
            current = format!("{word} ");
        } else {
            current.push_str(word);
            current.push(' ');
        }
    }
    lines.push(current.trim().to_string());
    lines
}

static BAR_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"width:\s*(\d+%)").expect("bar width pattern is valid"));

/// Extracts the `width: NN%` target from a skill bar's inline style.
pub fn skill_bar_width(style: &str) -> Option<&str> {
    BAR_WIDTH
        .captures(style)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── wrap_text ───────────────────────────────────────────────────────────

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_text("AI Skill Focus", 30), vec!["AI Skill Focus"]);
    }

    #[test]
    fn test_wrap_tooltip_label_breaks_before_overflowing_word() {
        let lines = wrap_text("AI Skill Focus: 95% Expertise", 20);
        assert_eq!(lines, vec!["AI Skill Focus: 95%", "Expertise"]);
    }

    #[test]
    fn test_wrap_overlong_first_word_leaves_empty_first_line() {
        let lines = wrap_text("Supercalifragilistic ok", 10);
        assert_eq!(lines, vec!["", "Supercalifragilistic", "ok"]);
    }

    #[test]
    fn test_wrap_default_tooltip_fits_in_thirty() {
        let label = tooltip_label("AI Skill Focus", Some(90));
        assert_eq!(label, "AI Skill Focus: 90% Expertise");
        assert_eq!(wrap_text(&label, 30), vec![label.clone()]);
    }

    // ── tooltip_label ───────────────────────────────────────────────────────

    #[test]
    fn test_tooltip_label_without_dataset_label() {
        assert_eq!(tooltip_label("", Some(80)), "80% Expertise");
    }

    #[test]
    fn test_tooltip_label_without_value() {
        assert_eq!(tooltip_label("AI Skill Focus", None), "AI Skill Focus: ");
    }

    // ── chart config ────────────────────────────────────────────────────────

    #[test]
    fn test_ai_chart_data_matches_skill_table() {
        let chart = ai_skills_chart();
        assert_eq!(chart.data.labels.len(), 6);
        assert_eq!(chart.data.labels[1], "LLMs (GPT, Claude, Gemini)");
        assert_eq!(chart.data.datasets[0].data, vec![90, 95, 80, 95, 85, 80]);
        assert_eq!(chart.options.plugins.tooltip.lines.len(), 6);
    }

    #[test]
    fn test_chart_serializes_in_library_shape() {
        let value = serde_json::to_value(ai_skills_chart()).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["options"]["indexAxis"], "y");
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        assert_eq!(value["options"]["scales"]["x"]["beginAtZero"], true);
        assert_eq!(value["options"]["scales"]["x"]["max"], 100);
        assert_eq!(value["options"]["scales"]["x"]["grid"]["color"], GRID_COLOR);
        assert_eq!(value["options"]["scales"]["y"]["grid"]["display"], false);
        assert!(value["options"]["scales"]["y"].get("max").is_none());
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], ACCENT_FILL);
        assert_eq!(value["data"]["datasets"][0]["borderWidth"], 1);
    }

    // ── skill_bar_width ─────────────────────────────────────────────────────

    #[test]
    fn test_skill_bar_width_extracts_percentage() {
        assert_eq!(skill_bar_width("width: 85%"), Some("85%"));
        assert_eq!(skill_bar_width("height: 4px; width:90%;"), Some("90%"));
    }

    #[test]
    fn test_skill_bar_width_absent() {
        assert_eq!(skill_bar_width("height: 4px"), None);
        assert_eq!(skill_bar_width("width: 12px"), None);
    }
}
