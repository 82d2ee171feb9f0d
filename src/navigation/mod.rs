// src/navigation/mod.rs

//! Section navigation and the progress bar.
//!
//! The controller owns the single active-section pointer and the set of
//! completed sections. Progress is derived from the active section's position
//! in [`Section::ALL`], completion only drives the per-item checkmarks.

use crate::core::{Section, TourError};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// One entry of the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressItem {
    pub section: Section,
    pub completed: bool,
    pub active: bool,
}

/// Tracks where the learner is and which sections they have passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    current: Section,
    /// Grows monotonically for the lifetime of the controller.
    completed: BTreeSet<Section>,
}

impl NavigationController {
    /// Creates a controller positioned on [`Section::Home`] with nothing completed.
    pub fn new() -> Self {
        Self {
            current: Section::Home,
            completed: BTreeSet::new(),
        }
    }

    /// Makes the section named by `id` the active one.
    ///
    /// # Errors
    /// Returns `TourError::UnknownSection` for ids outside the tour; the
    /// active section is left untouched.
    pub fn navigate(&mut self, id: &str) -> Result<Section, TourError> {
        match id.parse::<Section>() {
            Ok(section) => {
                self.navigate_to(section);
                Ok(section)
            }
            Err(err) => {
                warn!(section = id, current = %self.current, "Section not found");
                Err(err)
            }
        }
    }

    /// Typed form of [`navigate`](Self::navigate); cannot fail.
    pub fn navigate_to(&mut self, section: Section) {
        debug!(from = %self.current, to = %section, "Navigating");
        self.current = section;
    }

    /// Marks `from` completed, then navigates to `to`.
    ///
    /// An unknown `from` is rejected before anything changes. An unknown `to`
    /// still leaves `from` marked completed, matching the order of the two steps.
    pub fn advance(&mut self, from: &str, to: &str) -> Result<Section, TourError> {
        let from = from.parse::<Section>().inspect_err(|_| {
            warn!(section = from, "Cannot advance from unknown section");
        })?;
        self.advance_from(from, to)
    }

    /// Typed-`from` form of [`advance`](Self::advance).
    pub fn advance_from(&mut self, from: Section, to: &str) -> Result<Section, TourError> {
        self.mark_completed(from);
        self.navigate(to)
    }

    /// Adds `section` to the completed set. Idempotent; returns `true` when
    /// the section was not completed before.
    pub fn mark_completed(&mut self, section: Section) -> bool {
        let added = self.completed.insert(section);
        if added {
            debug!(section = %section, "Section completed");
        }
        added
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    /// Completed sections in tour order.
    pub fn completed_sections(&self) -> &BTreeSet<Section> {
        &self.completed
    }

    pub fn is_completed(&self, section: Section) -> bool {
        self.completed.contains(&section)
    }

    /// Fill of the progress bar in percent, `0.0` at home and `100.0` at the quiz.
    pub fn progress_percent(&self) -> f64 {
        progress_for(Some(self.current))
    }

    /// The progress strip, one item per section in tour order.
    pub fn progress_items(&self) -> Vec<ProgressItem> {
        Section::ALL
            .iter()
            .map(|&section| ProgressItem {
                section,
                completed: self.is_completed(section),
                active: section == self.current,
            })
            .collect()
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress for an optional section; a section missing from the order counts
/// as index -1 and is clamped to 0%.
pub fn progress_for(section: Option<Section>) -> f64 {
    let index = section.map_or(-1.0, |s| s.index() as f64);
    let last = (Section::ALL.len() - 1) as f64;
    (index / last * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home_with_zero_progress() {
        let nav = NavigationController::new();
        assert_eq!(nav.current_section(), Section::Home);
        assert_eq!(nav.progress_percent(), 0.0);
        assert!(nav.completed_sections().is_empty());
    }

    #[test]
    fn test_unknown_section_leaves_state_intact() {
        let mut nav = NavigationController::new();
        nav.navigate_to(Section::Gates);
        let before = nav.clone();

        let err = nav.navigate("missing").unwrap_err();
        assert_eq!(err, TourError::UnknownSection { id: "missing".to_string() });
        assert_eq!(nav, before);
    }

    #[test]
    fn test_advance_from_unknown_changes_nothing() {
        let mut nav = NavigationController::new();
        assert!(nav.advance("nowhere", "gates").is_err());
        assert_eq!(nav.current_section(), Section::Home);
        assert!(nav.completed_sections().is_empty());
    }

    #[test]
    fn test_advance_to_unknown_still_completes_from() {
        let mut nav = NavigationController::new();
        assert!(nav.advance("home", "nowhere").is_err());
        assert_eq!(nav.current_section(), Section::Home);
        assert!(nav.is_completed(Section::Home));
    }

    #[test]
    fn test_missing_section_clamps_to_zero() {
        assert_eq!(progress_for(None), 0.0);
        assert_eq!(progress_for(Some(Section::Quiz)), 100.0);
    }

    #[test]
    fn test_progress_items_flag_active_and_completed() {
        let mut nav = NavigationController::new();
        nav.advance("home", "introduction").unwrap();
        let items = nav.progress_items();
        assert_eq!(items.len(), 7);
        assert!(items[0].completed && !items[0].active);
        assert!(!items[1].completed && items[1].active);
        assert!(items[2..].iter().all(|i| !i.completed && !i.active));
    }
}
