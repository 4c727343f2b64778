use axum::Json;
use serde::{Deserialize, Serialize};

use crate::page::theme::{MemoryPreferenceStore, PreferenceStore, ThemeMode, DARK_MODE_KEY};
use crate::page::timeline::TimelineEntry;

#[derive(Deserialize)]
pub struct ThemeRequest {
    /// Current value of the `darkMode` preference, if the browser has one.
    #[serde(default)]
    pub stored: Option<String>,
    #[serde(default)]
    pub toggle: bool,
}

#[derive(Serialize)]
pub struct ThemeResponse {
    pub mode: ThemeMode,
    /// Value to write back under `darkMode`.
    pub stored: &'static str,
    pub icon_class: &'static str,
    pub body_class: Option<&'static str>,
}

#[derive(Deserialize)]
pub struct TimelineRequest {
    pub expanded: bool,
}

#[derive(Serialize)]
pub struct TimelineResponse {
    pub expanded: bool,
    pub label: &'static str,
    pub icon_rotation: &'static str,
}

/// POST /api/v1/page/theme
pub async fn handle_theme(Json(req): Json<ThemeRequest>) -> Json<ThemeResponse> {
    let mut store = MemoryPreferenceStore::default();
    if let Some(value) = &req.stored {
        store.set(DARK_MODE_KEY, value);
    }

    let mut mode = ThemeMode::load(&store);
    if req.toggle {
        mode = mode.toggle(&mut store);
    }

    Json(ThemeResponse {
        mode,
        stored: mode.stored_value(),
        icon_class: mode.icon_class(),
        body_class: mode.body_class(),
    })
}

/// POST /api/v1/page/timeline/toggle
pub async fn handle_timeline_toggle(Json(req): Json<TimelineRequest>) -> Json<TimelineResponse> {
    let mut entry = TimelineEntry::new(req.expanded);
    let view = entry.toggle();
    Json(TimelineResponse {
        expanded: entry.is_expanded(),
        label: view.label,
        icon_rotation: view.icon_rotation,
    })
}
