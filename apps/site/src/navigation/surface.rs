//! Render surface — the document the router projects its state onto.
#![allow(dead_code)]
//!
//! The router never reads activeness back from the surface; `NavigationState` is the
//! source of truth and every call here is a projection of it. `MemorySurface` is the
//! headless projection used by the HTTP handlers and the tests.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::navigation::catalog::{Direction, SectionCatalog};

pub trait SectionSurface: Send + 'static {
    /// True when the element tagged with `data-section="{id}"` exists.
    fn has_section(&self, id: &str) -> bool;

    fn deactivate_all_sections(&mut self);

    /// Marks the section active. Returns false when the element is gone.
    fn activate_section(&mut self, id: &str) -> bool;

    fn scroll_to_top(&mut self);

    fn clear_nav_highlights(&mut self);

    /// Highlights exactly the given nav link. Returns false when the link is gone.
    fn highlight_nav_link(&mut self, link_id: &str) -> bool;

    /// Ids of the currently highlighted nav links.
    fn nav_highlights(&self) -> Vec<String>;

    /// Looks up the nav link that targets `section_id`.
    fn nav_link_for(&self, section_id: &str) -> Option<String>;

    fn play_swipe_animation(&mut self, direction: Direction);

    fn supports_haptics(&self) -> bool {
        false
    }

    fn vibrate(&mut self, _pulse: Duration) {}
}

/// In-memory document: section elements, nav links, and a log of projected effects.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    /// section id -> active marker
    sections: BTreeMap<String, bool>,
    /// nav link id -> section id it targets
    nav_links: BTreeMap<String, String>,
    highlighted: BTreeSet<String>,
    scroll_resets: usize,
    animations: Vec<Direction>,
    haptics: Option<Vec<Duration>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// One section element and one `nav-{id}` link per registered section.
    pub fn from_catalog(catalog: &SectionCatalog) -> Self {
        let mut surface = Self::new();
        for id in catalog.sections() {
            surface.add_section(id);
            surface.add_nav_link(&format!("nav-{id}"), id);
        }
        surface
    }

    pub fn with_haptics(mut self) -> Self {
        self.haptics = Some(Vec::new());
        self
    }

    pub fn add_section(&mut self, id: &str) {
        self.sections.insert(id.to_string(), false);
    }

    pub fn remove_section(&mut self, id: &str) {
        self.sections.remove(id);
    }

    pub fn add_nav_link(&mut self, link_id: &str, section_id: &str) {
        self.nav_links
            .insert(link_id.to_string(), section_id.to_string());
    }

    pub fn active_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn highlighted_links(&self) -> Vec<&str> {
        self.highlighted.iter().map(String::as_str).collect()
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    pub fn animations(&self) -> &[Direction] {
        &self.animations
    }

    pub fn haptic_pulses(&self) -> &[Duration] {
        self.haptics.as_deref().unwrap_or_default()
    }
}

impl SectionSurface for MemorySurface {
    fn has_section(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    fn deactivate_all_sections(&mut self) {
        for active in self.sections.values_mut() {
            *active = false;
        }
    }

    fn activate_section(&mut self, id: &str) -> bool {
        match self.sections.get_mut(id) {
            Some(active) => {
                *active = true;
                true
            }
            None => false,
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }

    fn clear_nav_highlights(&mut self) {
        self.highlighted.clear();
    }

    fn highlight_nav_link(&mut self, link_id: &str) -> bool {
        if !self.nav_links.contains_key(link_id) {
            return false;
        }
        self.highlighted.insert(link_id.to_string());
        true
    }

    fn nav_highlights(&self) -> Vec<String> {
        self.highlighted.iter().cloned().collect()
    }

    fn nav_link_for(&self, section_id: &str) -> Option<String> {
        self.nav_links
            .iter()
            .find(|(_, target)| target.as_str() == section_id)
            .map(|(link, _)| link.clone())
    }

    fn play_swipe_animation(&mut self, direction: Direction) {
        self.animations.push(direction);
    }

    fn supports_haptics(&self) -> bool {
        self.haptics.is_some()
    }

    fn vibrate(&mut self, pulse: Duration) {
        if let Some(pulses) = self.haptics.as_mut() {
            pulses.push(pulse);
        }
    }
}
