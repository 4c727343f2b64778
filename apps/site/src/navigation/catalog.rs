//! Section catalog — the fixed set of page sections and the gesture order over them.
//!
//! # Rules
//! - Every id in the gesture order must be registered; the order has no duplicates.
//! - Informational sections (changelog, project details, ...) are registered but sit
//!   outside the gesture order: they are reachable by `navigate` only, never by swipe.
//! - The catalog is immutable once built. Routers share it through an `Arc`.

use serde::Serialize;
use thiserror::Error;

/// Direction of a relative (gesture or keyboard) navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("section order must contain at least one section")]
    EmptyOrder,

    #[error("section '{0}' appears more than once")]
    Duplicate(String),

    #[error("section id must not be blank")]
    BlankId,

    #[error("default section '{0}' is not registered")]
    UnknownDefault(String),

    #[error("gesture index {index} is out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionCatalog {
    /// Gesture order. Index positions here are the router's `current_index`.
    order: Vec<String>,
    /// Registered sections outside the gesture order.
    informational: Vec<String>,
    default: String,
}

impl SectionCatalog {
    /// Builds a catalog from the gesture order plus any informational sections.
    ///
    /// `default` falls back to the first section of the order when `None`.
    pub fn new(
        order: Vec<String>,
        informational: Vec<String>,
        default: Option<&str>,
    ) -> Result<Self, CatalogError> {
        if order.is_empty() {
            return Err(CatalogError::EmptyOrder);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(order.len() + informational.len());
        for id in order.iter().chain(informational.iter()) {
            if id.trim().is_empty() {
                return Err(CatalogError::BlankId);
            }
            if seen.contains(&id.as_str()) {
                return Err(CatalogError::Duplicate(id.clone()));
            }
            seen.push(id);
        }

        let default = match default {
            Some(d) if seen.contains(&d) => d.to_string(),
            Some(d) => return Err(CatalogError::UnknownDefault(d.to_string())),
            None => order[0].clone(),
        };

        Ok(Self {
            order,
            informational,
            default,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().chain(self.informational.iter()).any(|s| s == id)
    }

    /// Position of `id` in the gesture order, `None` for informational or unknown ids.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|s| s == id)
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn default_section(&self) -> &str {
        &self.default
    }

    /// All registered ids: gesture order first, then informational sections.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .chain(self.informational.iter())
            .map(String::as_str)
    }

    pub fn section_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    /// Wrapping step over the gesture order.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let n = self.order.len();
        match direction {
            Direction::Next => (index + 1) % n,
            Direction::Previous => (index % n + n - 1) % n,
        }
    }
}
