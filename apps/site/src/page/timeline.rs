//! Timeline entries collapse long descriptions behind a "Show more" toggle.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleView {
    pub label: &'static str,
    pub icon_rotation: &'static str,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimelineEntry {
    expanded: bool,
}

impl TimelineEntry {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> ToggleView {
        self.expanded = !self.expanded;
        self.view()
    }

    pub fn view(&self) -> ToggleView {
        if self.expanded {
            ToggleView {
                label: "Show less",
                icon_rotation: "rotate(180deg)",
            }
        } else {
            ToggleView {
                label: "Show more",
                icon_rotation: "rotate(0deg)",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let entry = TimelineEntry::default();
        assert!(!entry.is_expanded());
        assert_eq!(entry.view().label, "Show more");
    }

    #[test]
    fn test_toggle_flips_label_and_icon() {
        let mut entry = TimelineEntry::default();
        let open = entry.toggle();
        assert_eq!(open.label, "Show less");
        assert_eq!(open.icon_rotation, "rotate(180deg)");

        let closed = entry.toggle();
        assert_eq!(closed.label, "Show more");
        assert_eq!(closed.icon_rotation, "rotate(0deg)");
    }

    #[test]
    fn test_expanded_entry_collapses_on_toggle() {
        let mut entry = TimelineEntry::new(true);
        assert_eq!(entry.view().label, "Show less");
        entry.toggle();
        assert!(!entry.is_expanded());
    }
}
