use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::navigation::catalog::SectionCatalog;
use crate::navigation::gesture::{SwipeDirection, TouchPoint};
use crate::navigation::router::{NavigationOutcome, NavigationState};
use crate::navigation::NavSource;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GestureRequest {
    pub current: String,
    /// Gesture position kept by the client while an informational section is showing.
    #[serde(default)]
    pub index: Option<usize>,
    pub start: TouchPoint,
    pub end: TouchPoint,
}

#[derive(Deserialize)]
pub struct KeyRequest {
    pub current: String,
    #[serde(default)]
    pub index: Option<usize>,
    pub key: String,
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub current: String,
    #[serde(default)]
    pub index: Option<usize>,
    pub target: String,
    #[serde(default)]
    pub source: Option<NavSource>,
}

#[derive(Serialize)]
pub struct GestureResponse {
    pub direction: SwipeDirection,
    /// Absent when the swipe did not classify to a direction.
    pub outcome: Option<NavigationOutcome>,
    pub state: NavigationState,
}

#[derive(Serialize)]
pub struct KeyResponse {
    /// Absent when the key is not bound to navigation.
    pub outcome: Option<NavigationOutcome>,
    pub state: NavigationState,
}

#[derive(Serialize)]
pub struct SelectResponse {
    pub outcome: NavigationOutcome,
    pub state: NavigationState,
    /// Sections visible once the transition has finished.
    pub active: Vec<String>,
    pub highlighted: Vec<String>,
}

/// GET /api/v1/sections
pub async fn handle_sections(State(state): State<AppState>) -> Json<SectionCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/navigation/gesture
pub async fn handle_gesture(
    State(state): State<AppState>,
    Json(req): Json<GestureRequest>,
) -> Result<Json<GestureResponse>, AppError> {
    let mut router = state.router_at(&req.current, req.index)?;
    let direction = state.classifier.classify(req.start, req.end);
    let outcome = direction.direction().map(|d| router.navigate_relative(d));
    let nav = router.state();

    info!(
        from = %req.current,
        to = %nav.active_section,
        direction = ?direction,
        "Gesture resolved"
    );

    Ok(Json(GestureResponse {
        direction,
        outcome,
        state: nav,
    }))
}

/// POST /api/v1/navigation/key
pub async fn handle_key(
    State(state): State<AppState>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<KeyResponse>, AppError> {
    let mut router = state.router_at(&req.current, req.index)?;
    let outcome = router.handle_key(&req.key);
    Ok(Json(KeyResponse {
        outcome,
        state: router.state(),
    }))
}

/// POST /api/v1/navigation/select
///
/// Nav-link or dropdown selection. Waits out the transition so `active` reflects the
/// finished page.
pub async fn handle_select(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, AppError> {
    let mut router = state.router_at(&req.current, req.index)?;
    router.start();
    let outcome = router.navigate(&req.target, req.source);
    router.settle().await;

    let (active, highlighted): (Vec<String>, Vec<String>) = router.with_surface(|s| {
        (
            s.active_sections().iter().map(|id| id.to_string()).collect(),
            s.highlighted_links().iter().map(|id| id.to_string()).collect(),
        )
    });
    info!(
        from = %req.current,
        target = %req.target,
        outcome = ?outcome,
        "Selection resolved"
    );

    Ok(Json(SelectResponse {
        outcome,
        state: router.state(),
        active,
        highlighted,
    }))
}
