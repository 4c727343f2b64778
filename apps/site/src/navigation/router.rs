//! Section Router — owns "which section is visible" and projects it onto a surface.
#![allow(dead_code)]
//!
//! # Navigation sequence
//! 1. Unknown id → `IgnoredUnknownTarget`, nothing touched.
//! 2. Element missing from the surface → `IgnoredMissingElement`, nothing touched.
//! 3. State update: `active_section`, and `current_index` when the id is in the gesture order.
//! 4. Surface: deactivate every section, update nav highlighting for the source.
//! 5. Deferred by `transition_delay` (lets the CSS fade start): scroll to top, activate target.
//! 6. Announcement + analytics event, fire-and-forget.
//!
//! # Superseded navigations
//! A new navigation aborts the pending deferred step and bumps a generation counter, so a
//! step that already woke up but lost the race does nothing. The last navigation wins.
//!
//! If the target element disappears before the deferred step runs, the previous state and
//! nav highlight are restored and re-activated, and the sinks are told about the rollback.
//! The page never ends up with zero visible sections.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::navigation::catalog::{CatalogError, Direction, SectionCatalog};
use crate::navigation::gesture::{route_key, KeyRoute};
use crate::navigation::sinks::{
    announcement_for, AnalyticsEvent, AnalyticsSink, Announcer, TracingAnalytics,
    TracingAnnouncer,
};
use crate::navigation::surface::SectionSurface;

pub const TRANSITION_DELAY: Duration = Duration::from_millis(50);
pub const HAPTIC_PULSE: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// Position in the gesture order. Left alone when an informational section is shown.
    pub current_index: usize,
    pub active_section: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOutcome {
    Applied,
    IgnoredUnknownTarget,
    IgnoredMissingElement,
}

/// The control that triggered a navigation. On the wire: `{"link": "nav-skills"}` or `"dropdown"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSource {
    /// A nav link; exactly this link gets highlighted.
    Link(String),
    /// The mobile dropdown; the nav link targeting the section gets highlighted.
    Dropdown,
}

#[derive(Clone)]
pub struct RouterSinks {
    pub announcer: Arc<dyn Announcer>,
    pub analytics: Arc<dyn AnalyticsSink>,
}

impl Default for RouterSinks {
    fn default() -> Self {
        Self {
            announcer: Arc::new(TracingAnnouncer),
            analytics: Arc::new(TracingAnalytics),
        }
    }
}

/// What a deferred step rolls back to when its target has vanished.
struct Snapshot {
    state: NavigationState,
    highlights: Vec<String>,
}

struct Shared<S> {
    state: NavigationState,
    surface: S,
    generation: u64,
}

pub struct SectionRouter<S: SectionSurface> {
    id: Uuid,
    catalog: Arc<SectionCatalog>,
    shared: Arc<Mutex<Shared<S>>>,
    sinks: RouterSinks,
    transition_delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<S: SectionSurface> SectionRouter<S> {
    /// Router whose state starts at the catalog default. Nothing is shown until `start`.
    pub fn new(catalog: Arc<SectionCatalog>, surface: S, sinks: RouterSinks) -> Self {
        let start = catalog.default_section().to_string();
        Self::build(catalog, surface, sinks, start)
    }

    /// Router whose state starts at `section` instead of the catalog default.
    pub fn starting_at(
        catalog: Arc<SectionCatalog>,
        surface: S,
        sinks: RouterSinks,
        section: &str,
    ) -> Result<Self, CatalogError> {
        if !catalog.contains(section) {
            return Err(CatalogError::UnknownDefault(section.to_string()));
        }
        Ok(Self::build(catalog, surface, sinks, section.to_string()))
    }

    fn build(catalog: Arc<SectionCatalog>, surface: S, sinks: RouterSinks, start: String) -> Self {
        let state = NavigationState {
            current_index: catalog.position(&start).unwrap_or(0),
            active_section: start,
        };
        Self {
            id: Uuid::new_v4(),
            catalog,
            shared: Arc::new(Mutex::new(Shared {
                state,
                surface,
                generation: 0,
            })),
            sinks,
            transition_delay: TRANSITION_DELAY,
            pending: None,
        }
    }

    /// Seeds the gesture position while an informational section is active.
    /// A no-op when the active section is itself in the gesture order.
    pub fn with_gesture_index(self, index: usize) -> Result<Self, CatalogError> {
        let len = self.catalog.order().len();
        if index >= len {
            return Err(CatalogError::IndexOutOfRange { index, len });
        }
        {
            let mut shared = lock(&self.shared);
            if self.catalog.position(&shared.state.active_section).is_none() {
                shared.state.current_index = index;
            }
        }
        Ok(self)
    }

    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> NavigationState {
        lock(&self.shared).state.clone()
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&lock(&self.shared).surface)
    }

    pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut lock(&self.shared).surface)
    }

    /// Page-load navigation to the starting section.
    pub fn start(&mut self) -> NavigationOutcome {
        let start = self.state().active_section;
        self.navigate(&start, None)
    }

    pub fn navigate(&mut self, section_id: &str, source: Option<NavSource>) -> NavigationOutcome {
        if !self.catalog.contains(section_id) {
            debug!(router = %self.id, section = section_id, "Ignoring navigation to unknown section");
            return NavigationOutcome::IgnoredUnknownTarget;
        }

        let mut shared = lock(&self.shared);
        if !shared.surface.has_section(section_id) {
            warn!(router = %self.id, section = section_id, "Section element missing; navigation ignored");
            return NavigationOutcome::IgnoredMissingElement;
        }

        let previous = Snapshot {
            state: shared.state.clone(),
            highlights: shared.surface.nav_highlights(),
        };
        shared.state.active_section = section_id.to_string();
        if let Some(index) = self.catalog.position(section_id) {
            shared.state.current_index = index;
        }

        shared.surface.deactivate_all_sections();
        shared.generation += 1;
        let generation = shared.generation;

        match &source {
            Some(NavSource::Link(link)) => {
                shared.surface.clear_nav_highlights();
                if !shared.surface.highlight_nav_link(link) {
                    debug!(router = %self.id, link = %link, "Source nav link missing");
                }
            }
            Some(NavSource::Dropdown) => {
                shared.surface.clear_nav_highlights();
                match shared.surface.nav_link_for(section_id) {
                    Some(link) => {
                        shared.surface.highlight_nav_link(&link);
                    }
                    None => debug!(router = %self.id, section = section_id, "No nav link for section"),
                }
            }
            None => {}
        }
        let current_index = shared.state.current_index;
        drop(shared);

        self.schedule_activation(generation, section_id.to_string(), previous);

        self.sinks.announcer.announce(&announcement_for(section_id));
        self.sinks
            .analytics
            .record(AnalyticsEvent::section_view(section_id, self.id));

        debug!(router = %self.id, section = section_id, index = current_index, "Navigated");
        NavigationOutcome::Applied
    }

    /// Steps one position through the gesture order, wrapping at both ends.
    pub fn navigate_relative(&mut self, direction: Direction) -> NavigationOutcome {
        let index = self.catalog.step(self.state().current_index, direction);
        let Some(target) = self.catalog.section_at(index).map(str::to_string) else {
            return NavigationOutcome::IgnoredUnknownTarget;
        };

        let outcome = self.navigate(&target, None);
        if outcome == NavigationOutcome::Applied {
            let mut shared = lock(&self.shared);
            shared.surface.play_swipe_animation(direction);
            if shared.surface.supports_haptics() {
                shared.surface.vibrate(HAPTIC_PULSE);
            }
        }
        outcome
    }

    /// Routes a key press. `None` when the key is not bound to navigation.
    pub fn handle_key(&mut self, key: &str) -> Option<NavigationOutcome> {
        let target = match route_key(key)? {
            KeyRoute::Relative(direction) => return Some(self.navigate_relative(direction)),
            KeyRoute::First => self.catalog.order().first(),
            KeyRoute::Last => self.catalog.order().last(),
        }
        .cloned()?;
        Some(self.navigate(&target, None))
    }

    /// Waits for the pending deferred activation, if any.
    pub async fn settle(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        match handle.await {
            Ok(()) => {}
            // Superseded step.
            Err(e) if e.is_cancelled() => {}
            Err(e) => warn!(router = %self.id, error = %e, "Deferred activation failed"),
        }
    }

    fn schedule_activation(&mut self, generation: u64, target: String, previous: Snapshot) {
        if let Some(stale) = self.pending.take() {
            stale.abort();
        }

        let shared = Arc::clone(&self.shared);
        let sinks = self.sinks.clone();
        let delay = self.transition_delay;
        let router_id = self.id;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut shared = lock(&shared);
            if shared.generation != generation {
                return;
            }

            shared.surface.scroll_to_top();
            if shared.surface.activate_section(&target) {
                return;
            }

            let restored = previous.state.active_section.clone();
            warn!(
                router = %router_id,
                section = %target,
                restored = %restored,
                "Section element vanished before activation; restoring previous section"
            );
            if !shared.surface.activate_section(&restored) {
                warn!(router = %router_id, section = %restored, "Previous section also missing");
            }
            shared.surface.clear_nav_highlights();
            for link in &previous.highlights {
                shared.surface.highlight_nav_link(link);
            }
            shared.state = previous.state;
            drop(shared);

            sinks.announcer.announce(&announcement_for(&restored));
            sinks
                .analytics
                .record(AnalyticsEvent::section_restored(&restored, router_id));
        }));
    }
}

impl<S: SectionSurface> Drop for SectionRouter<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

fn lock<S>(shared: &Mutex<Shared<S>>) -> MutexGuard<'_, Shared<S>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
