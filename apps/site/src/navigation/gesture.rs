//! Swipe and keyboard input translation.
#![allow(dead_code)]
//!
//! A swipe only counts when it is predominantly horizontal and travels further than the
//! threshold; everything else (vertical scrolls, short jitters, diagonals) is `None`.

use serde::{Deserialize, Serialize};

use crate::navigation::catalog::Direction;

/// Minimum horizontal travel, in device-independent pixels, for a swipe to navigate.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Next,
    Previous,
    None,
}

impl SwipeDirection {
    pub fn direction(self) -> Option<Direction> {
        match self {
            SwipeDirection::Next => Some(Direction::Next),
            SwipeDirection::Previous => Some(Direction::Previous),
            SwipeDirection::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GestureClassifier {
    threshold_px: f64,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl GestureClassifier {
    /// `threshold_px` must be finite and non-negative; `Config` enforces this at startup.
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    /// Classifies a touch from `start` to `end`.
    ///
    /// `dx` is measured start minus end, so a finger moving right-to-left (swipe left)
    /// gives a positive `dx` and means "next".
    pub fn classify(&self, start: TouchPoint, end: TouchPoint) -> SwipeDirection {
        let dx = start.x - end.x;
        let dy = start.y - end.y;

        if dx.abs() <= dy.abs() || dx.abs() <= self.threshold_px {
            return SwipeDirection::None;
        }

        if dx > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        }
    }
}

/// Classifies with the default 50px threshold.
pub fn classify_gesture(start: TouchPoint, end: TouchPoint) -> SwipeDirection {
    GestureClassifier::default().classify(start, end)
}

/// Where a key press sends the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    Relative(Direction),
    First,
    Last,
}

/// Maps a `KeyboardEvent.key` value to a route. Unbound keys return `None`.
pub fn route_key(key: &str) -> Option<KeyRoute> {
    match key {
        "ArrowRight" => Some(KeyRoute::Relative(Direction::Next)),
        "ArrowLeft" => Some(KeyRoute::Relative(Direction::Previous)),
        "Home" => Some(KeyRoute::First),
        "End" => Some(KeyRoute::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> TouchPoint {
        TouchPoint::new(x, y)
    }

    #[test]
    fn test_swipe_left_is_next() {
        assert_eq!(classify_gesture(p(100.0, 0.0), p(0.0, 5.0)), SwipeDirection::Next);
    }

    // dx is start minus end: a finger moving left-to-right is "previous".
    #[test]
    fn test_swipe_right_is_previous() {
        assert_eq!(
            classify_gesture(p(0.0, 0.0), p(100.0, 5.0)),
            SwipeDirection::Previous
        );
    }

    #[test]
    fn test_short_swipe_is_none() {
        assert_eq!(classify_gesture(p(0.0, 0.0), p(10.0, 5.0)), SwipeDirection::None);
    }

    #[test]
    fn test_vertical_scroll_is_none() {
        assert_eq!(classify_gesture(p(0.0, 0.0), p(5.0, 100.0)), SwipeDirection::None);
    }

    #[test]
    fn test_exact_threshold_does_not_navigate() {
        assert_eq!(classify_gesture(p(50.0, 0.0), p(0.0, 0.0)), SwipeDirection::None);
        assert_eq!(classify_gesture(p(51.0, 0.0), p(0.0, 0.0)), SwipeDirection::Next);
    }

    #[test]
    fn test_perfect_diagonal_is_none() {
        assert_eq!(
            classify_gesture(p(200.0, 200.0), p(0.0, 0.0)),
            SwipeDirection::None
        );
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = GestureClassifier::new(120.0);
        assert_eq!(classifier.classify(p(100.0, 0.0), p(0.0, 0.0)), SwipeDirection::None);
        assert_eq!(classifier.classify(p(130.0, 0.0), p(0.0, 0.0)), SwipeDirection::Next);
    }

    #[test]
    fn test_swipe_direction_maps_to_router_direction() {
        assert_eq!(SwipeDirection::Next.direction(), Some(Direction::Next));
        assert_eq!(SwipeDirection::Previous.direction(), Some(Direction::Previous));
        assert_eq!(SwipeDirection::None.direction(), None);
    }

    #[test]
    fn test_route_key_bindings() {
        assert_eq!(route_key("ArrowRight"), Some(KeyRoute::Relative(Direction::Next)));
        assert_eq!(route_key("ArrowLeft"), Some(KeyRoute::Relative(Direction::Previous)));
        assert_eq!(route_key("Home"), Some(KeyRoute::First));
        assert_eq!(route_key("End"), Some(KeyRoute::Last));
        assert_eq!(route_key("Enter"), None);
    }
}
