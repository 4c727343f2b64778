use axum::Json;
use serde::{Deserialize, Serialize};

use crate::showcase::chart::{ai_skills_chart, skill_bar_width, ChartConfig};

#[derive(Deserialize)]
pub struct SkillBarsRequest {
    /// Inline `style` attribute of each skill bar, in page order.
    pub styles: Vec<String>,
}

#[derive(Serialize)]
pub struct SkillBarsResponse {
    /// Target width per bar; `null` when the style carries no percentage width.
    pub widths: Vec<Option<String>>,
}

/// GET /api/v1/skills/chart
pub async fn handle_skills_chart() -> Json<ChartConfig> {
    Json(ai_skills_chart())
}

/// POST /api/v1/skills/bars
pub async fn handle_skill_bars(Json(req): Json<SkillBarsRequest>) -> Json<SkillBarsResponse> {
    let widths = req
        .styles
        .iter()
        .map(|style| skill_bar_width(style).map(str::to_string))
        .collect();
    Json(SkillBarsResponse { widths })
}
