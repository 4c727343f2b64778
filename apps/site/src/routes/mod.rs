pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::assets::handlers as assets;
use crate::contact::handlers as contact;
use crate::navigation::handlers as navigation;
use crate::page::handlers as page;
use crate::showcase::handlers as showcase;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.site_root);

    Router::new()
        .route("/health", get(health::health_handler))
        // Section navigation
        .route("/api/v1/sections", get(navigation::handle_sections))
        .route(
            "/api/v1/navigation/gesture",
            post(navigation::handle_gesture),
        )
        .route("/api/v1/navigation/key", post(navigation::handle_key))
        .route(
            "/api/v1/navigation/select",
            post(navigation::handle_select),
        )
        // Page content
        .route("/api/v1/skills/chart", get(showcase::handle_skills_chart))
        .route("/api/v1/skills/bars", post(showcase::handle_skill_bars))
        .route("/api/v1/page/theme", post(page::handle_theme))
        .route(
            "/api/v1/page/timeline/toggle",
            post(page::handle_timeline_toggle),
        )
        .route("/api/v1/contact", post(contact::handle_contact))
        .route("/api/v1/contact/modal", post(contact::handle_modal))
        .route("/styles.min.css", get(assets::handle_minified_styles))
        .fallback_service(static_files)
        .with_state(state)
}
