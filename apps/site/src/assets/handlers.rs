use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::assets::minify::minify_css;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /styles.min.css
/// Minifies `styles.css` from the site root on each request.
pub async fn handle_minified_styles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let source = tokio::fs::read_to_string(state.config.site_root.join("styles.css")).await?;
    let minified = minify_css(&source);
    debug!(
        source_bytes = source.len(),
        minified_bytes = minified.len(),
        "Stylesheet minified"
    );
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], minified))
}
