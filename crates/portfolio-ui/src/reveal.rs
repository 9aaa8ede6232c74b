//! Reveal-on-scroll state tracking.
//!
//! Each element tagged for a reveal animation carries a binary
//! lifecycle: it starts `Pending` (hidden, offset) and flips to
//! `Revealed` the first time enough of it enters the viewport.
//! `Revealed` is terminal: scrolling the element back out of view does
//! not reset the animation.
//!
//! One [`RevealRegistry`] serves every tagged element on the page. The
//! observed set is fixed when the page mounts; visibility reports for
//! ids outside that set are ignored.

use std::collections::HashMap;

/// Lifecycle of a single reveal-tagged element.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealState {
    /// Not yet seen in the viewport; renders hidden/offset.
    #[default]
    Pending,
    /// Has crossed the visibility threshold at least once. Terminal.
    Revealed,
}

impl RevealState {
    /// Whether the element has completed its one-shot transition.
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Shared reveal state for every tagged element on the page.
///
/// A single viewport watcher fans out to all observed elements, so the
/// registry is the only per-element bookkeeping needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealRegistry {
    states: HashMap<String, RevealState>,
}

impl RevealRegistry {
    /// Empty registry observing nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the full observed set, all `Pending`.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: ids
                .into_iter()
                .map(|id| (id.into(), RevealState::Pending))
                .collect(),
        }
    }

    /// Number of observed elements.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether `id` has revealed.
    ///
    /// Unobserved ids report `false`; they render in their final state
    /// rather than staying invisible forever.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.states
            .get(id)
            .map(RevealState::is_revealed)
            .unwrap_or(false)
    }

    /// Record that `id` crossed the visibility threshold.
    ///
    /// Returns `true` only when this call performed the
    /// `Pending -> Revealed` transition; repeat reports return `false`.
    /// Ids outside the observed set are ignored.
    pub fn mark_visible(&mut self, id: &str) -> bool {
        match self.states.get_mut(id) {
            Some(state @ RevealState::Pending) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Apply a visibility report from the viewport watcher.
    ///
    /// Only `visible == true` can change state; an element leaving the
    /// viewport never reverts its reveal.
    pub fn update(&mut self, id: &str, visible: bool) -> bool {
        if visible {
            self.mark_visible(id)
        } else {
            false
        }
    }

    /// How many observed elements have revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| s.is_revealed())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_pending() {
        assert_eq!(RevealState::default(), RevealState::Pending);
        assert!(!RevealState::Pending.is_revealed());
        assert!(RevealState::Revealed.is_revealed());
    }

    #[test]
    fn seeded_ids_start_pending() {
        let reg = RevealRegistry::with_ids(["hero", "stats"]);
        assert_eq!(reg.len(), 2);
        assert!(!reg.is_revealed("hero"));
        assert!(!reg.is_revealed("stats"));
        assert_eq!(reg.revealed_count(), 0);
    }

    #[test]
    fn mark_visible_fires_exactly_once() {
        let mut reg = RevealRegistry::with_ids(["about"]);
        assert!(reg.mark_visible("about"));
        assert!(!reg.mark_visible("about"));
        assert!(reg.is_revealed("about"));
        assert_eq!(reg.revealed_count(), 1);
    }

    #[test]
    fn leaving_viewport_never_reverts() {
        let mut reg = RevealRegistry::with_ids(["contact"]);
        assert!(reg.update("contact", true));
        assert!(!reg.update("contact", false));
        assert!(reg.is_revealed("contact"));
    }

    #[test]
    fn hidden_report_before_reveal_is_a_no_op() {
        let mut reg = RevealRegistry::with_ids(["skills"]);
        assert!(!reg.update("skills", false));
        assert!(!reg.is_revealed("skills"));
    }

    #[test]
    fn unobserved_ids_are_ignored() {
        let mut reg = RevealRegistry::with_ids(["about"]);
        assert!(!reg.mark_visible("added-after-mount"));
        assert!(!reg.is_revealed("added-after-mount"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn empty_registry() {
        let reg = RevealRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.revealed_count(), 0);
    }
}
