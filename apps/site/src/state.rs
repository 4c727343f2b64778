use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::navigation::{
    CatalogError, GestureClassifier, MemorySurface, RouterSinks, SectionCatalog, SectionRouter,
};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed at startup; every router built by a handler shares it.
    pub catalog: Arc<SectionCatalog>,
    pub classifier: GestureClassifier,
    /// Announcement + analytics sinks handed to each router. Default: tracing-backed.
    pub sinks: RouterSinks,
}

impl AppState {
    pub fn new(config: Config, catalog: SectionCatalog) -> Self {
        let classifier = GestureClassifier::new(config.swipe_threshold_px);
        Self {
            config,
            catalog: Arc::new(catalog),
            classifier,
            sinks: RouterSinks::default(),
        }
    }

    /// Headless router positioned at `section`.
    ///
    /// `gesture_index` is the position the client kept while an informational section is
    /// showing; it only applies when `section` is outside the gesture order.
    /// `NotFound` for unregistered ids, `Validation` for an out-of-range index.
    pub fn router_at(
        &self,
        section: &str,
        gesture_index: Option<usize>,
    ) -> Result<SectionRouter<MemorySurface>, AppError> {
        let surface = MemorySurface::from_catalog(&self.catalog);
        let router = SectionRouter::starting_at(
            Arc::clone(&self.catalog),
            surface,
            self.sinks.clone(),
            section,
        )
        .map_err(|_| AppError::NotFound(format!("Section '{section}' is not registered")))?
        .with_transition_delay(self.config.transition_delay);

        match gesture_index {
            Some(index) => router.with_gesture_index(index).map_err(|e| match e {
                CatalogError::IndexOutOfRange { .. } => AppError::Validation(e.to_string()),
                other => AppError::Internal(other.into()),
            }),
            None => Ok(router),
        }
    }
}
