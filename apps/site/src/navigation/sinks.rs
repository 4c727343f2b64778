//! Best-effort collaborators called after every applied navigation.
//!
//! Both sinks are infallible from the router's point of view: nothing they do can
//! change a navigation outcome.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Speaks text to assistive technology (an ARIA live region in the browser).
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}

/// Records a named analytics event.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub section: String,
    pub router_id: Uuid,
    pub at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn section_view(section: &str, router_id: Uuid) -> Self {
        Self {
            name: "section_view",
            section: section.to_string(),
            router_id,
            at: Utc::now(),
        }
    }

    /// Emitted when a navigation is rolled back because its target vanished.
    pub fn section_restored(section: &str, router_id: Uuid) -> Self {
        Self {
            name: "section_restored",
            ..Self::section_view(section, router_id)
        }
    }
}

/// Default announcer for the headless router: logs the announcement.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnnouncer;

impl Announcer for TracingAnnouncer {
    fn announce(&self, message: &str) {
        info!(target: "site::a11y", text = message, "Announcement");
    }
}

/// Default analytics sink: one structured log line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn record(&self, event: AnalyticsEvent) {
        info!(
            target: "site::analytics",
            event = event.name,
            section = %event.section,
            router = %event.router_id,
            at = %event.at,
            "Analytics event"
        );
    }
}

pub fn announcement_for(section: &str) -> String {
    format!("Showing {section} section")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_names_section() {
        assert_eq!(announcement_for("skills"), "Showing skills section");
    }

    #[test]
    fn test_section_view_event_carries_router_id() {
        let id = Uuid::new_v4();
        let event = AnalyticsEvent::section_view("timeline", id);
        assert_eq!(event.name, "section_view");
        assert_eq!(event.section, "timeline");
        assert_eq!(event.router_id, id);
    }

    #[test]
    fn test_tracing_sinks_do_not_panic_without_subscriber() {
        TracingAnnouncer.announce("Showing overview section");
        TracingAnalytics.record(AnalyticsEvent::section_view("overview", Uuid::new_v4()));
    }
}
