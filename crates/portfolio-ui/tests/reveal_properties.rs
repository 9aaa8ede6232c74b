//! Property-based tests for the reveal registry
//!
//! Uses proptest to verify the one-shot reveal invariants under
//! arbitrary visibility report interleavings.

use proptest::prelude::*;
use portfolio_ui::reveal::RevealRegistry;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Ids drawn from a small observed set plus some that were never observed
fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(OBSERVED.to_vec()).prop_map(str::to_string),
        1 => "[a-z]{3,8}".prop_map(|s| format!("ghost-{s}")),
    ]
}

/// A visibility report: (element id, entered-or-left viewport)
fn report_strategy() -> impl Strategy<Value = (String, bool)> {
    (id_strategy(), any::<bool>())
}

const OBSERVED: [&str; 5] = [
    "hero-stats",
    "about-panel",
    "about-story",
    "job-0",
    "contact",
];

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Once an element reveals, no later report sequence reverts it
    #[test]
    fn reveal_is_monotonic(reports in prop::collection::vec(report_strategy(), 0..100)) {
        let mut reg = RevealRegistry::with_ids(OBSERVED);
        let mut seen_revealed: Vec<String> = Vec::new();

        for (id, visible) in reports {
            reg.update(&id, visible);
            if reg.is_revealed(&id) && !seen_revealed.contains(&id) {
                seen_revealed.push(id.clone());
            }
            for revealed in &seen_revealed {
                prop_assert!(reg.is_revealed(revealed), "{revealed} reverted");
            }
        }
    }

    /// The transition fires at most once per element
    #[test]
    fn transition_fires_exactly_once(reports in prop::collection::vec(report_strategy(), 0..100)) {
        let mut reg = RevealRegistry::with_ids(OBSERVED);
        let mut fired: Vec<String> = Vec::new();

        for (id, visible) in reports {
            if reg.update(&id, visible) {
                prop_assert!(!fired.contains(&id), "{id} fired twice");
                fired.push(id);
            }
        }
    }

    /// The observed set never grows, whatever ids get reported
    #[test]
    fn observed_set_is_fixed_at_mount(reports in prop::collection::vec(report_strategy(), 0..100)) {
        let mut reg = RevealRegistry::with_ids(OBSERVED);

        for (id, visible) in reports {
            reg.update(&id, visible);
        }

        prop_assert_eq!(reg.len(), OBSERVED.len());
        for id in OBSERVED {
            let _ = reg.is_revealed(id);
        }
    }

    /// Revealed count equals the number of distinct observed ids that
    /// ever reported visible
    #[test]
    fn revealed_count_matches_history(reports in prop::collection::vec(report_strategy(), 0..100)) {
        let mut reg = RevealRegistry::with_ids(OBSERVED);
        let mut expected: Vec<String> = Vec::new();

        for (id, visible) in reports {
            reg.update(&id, visible);
            if visible && OBSERVED.contains(&id.as_str()) && !expected.contains(&id) {
                expected.push(id);
            }
        }

        prop_assert_eq!(reg.revealed_count(), expected.len());
    }
}
