mod assets;
mod config;
mod contact;
mod errors;
mod navigation;
mod page;
mod routes;
mod showcase;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::navigation::SectionCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing or malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé site v{}", env!("CARGO_PKG_VERSION"));

    let catalog = SectionCatalog::new(
        config.section_order.clone(),
        config.info_sections.clone(),
        config.default_section.as_deref(),
    )
    .context("SECTION_ORDER / INFO_SECTIONS / DEFAULT_SECTION do not form a valid catalog")?;
    info!(
        sections = ?catalog.order(),
        default = catalog.default_section(),
        "Section catalog loaded"
    );

    if !config.site_root.is_dir() {
        tracing::warn!(
            "Site root {} does not exist; static files will 404",
            config.site_root.display()
        );
    }
    info!(
        "Gesture threshold {}px, transition delay {:?}",
        config.swipe_threshold_px, config.transition_delay
    );

    let state = AppState::new(config.clone(), catalog);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
