//! Disclosure state machine for expandable cards.
//!
//! Transitions are a pure function of (event, current state, viewport class)
//! so the responsive branching is testable without a rendering environment.
//! The viewport class is snapshotted at toggle time: a breakpoint crossing
//! while a card is expanded never retroactively changes its display mode.

use serde::{Deserialize, Serialize};

use crate::viewport::ViewportClass;

/// Per-card, transient disclosure state. Cards mount collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisclosureState {
    Collapsed,
    /// Height-animated in-place expansion; only reachable on regular viewports
    ExpandedInline,
    /// Bottom-sheet overlay; only reachable on compact viewports
    ExpandedOverlay,
}

impl DisclosureState {
    /// Apply a user toggle (click, Enter, Space).
    ///
    /// Non-expandable cards are inert: every event maps to the current state.
    /// Either expanded state returns to `Collapsed`; an expanded card never
    /// crosses directly into the other expansion mode.
    #[must_use]
    pub fn toggled(self, viewport: ViewportClass, expandable: bool) -> Self {
        if !expandable {
            return self;
        }
        match self {
            DisclosureState::Collapsed => match viewport {
                ViewportClass::Regular => DisclosureState::ExpandedInline,
                ViewportClass::Compact => DisclosureState::ExpandedOverlay,
            },
            DisclosureState::ExpandedInline | DisclosureState::ExpandedOverlay => {
                DisclosureState::Collapsed
            }
        }
    }

    /// Apply an explicit dismissal (backdrop click, close control).
    /// Idempotent: dismissing a collapsed card is a no-op.
    #[must_use]
    pub fn dismissed(self) -> Self {
        DisclosureState::Collapsed
    }

    pub fn is_expanded(self) -> bool {
        !matches!(self, DisclosureState::Collapsed)
    }
}

impl Default for DisclosureState {
    fn default() -> Self {
        DisclosureState::Collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn regular_viewport_alternates_collapsed_and_inline() {
        let s0 = DisclosureState::Collapsed;
        let s1 = s0.toggled(ViewportClass::Regular, true);
        assert_eq!(s1, DisclosureState::ExpandedInline);
        let s2 = s1.toggled(ViewportClass::Regular, true);
        assert_eq!(s2, DisclosureState::Collapsed);
    }

    #[test]
    fn compact_viewport_alternates_collapsed_and_overlay() {
        let s0 = DisclosureState::Collapsed;
        let s1 = s0.toggled(ViewportClass::Compact, true);
        assert_eq!(s1, DisclosureState::ExpandedOverlay);
        let s2 = s1.toggled(ViewportClass::Compact, true);
        assert_eq!(s2, DisclosureState::Collapsed);
    }

    #[test]
    fn non_expandable_cards_are_inert() {
        for state in [
            DisclosureState::Collapsed,
            DisclosureState::ExpandedInline,
            DisclosureState::ExpandedOverlay,
        ] {
            for viewport in [ViewportClass::Compact, ViewportClass::Regular] {
                assert_eq!(state.toggled(viewport, false), state);
            }
        }
    }

    #[test]
    fn breakpoint_crossing_while_expanded_does_not_switch_modes() {
        // Expanded inline, viewport shrinks to compact: the next toggle
        // collapses, it does not jump to the bottom sheet.
        let expanded = DisclosureState::Collapsed.toggled(ViewportClass::Regular, true);
        assert_eq!(
            expanded.toggled(ViewportClass::Compact, true),
            DisclosureState::Collapsed
        );

        // And symmetrically for the bottom sheet growing to regular.
        let sheet = DisclosureState::Collapsed.toggled(ViewportClass::Compact, true);
        assert_eq!(
            sheet.toggled(ViewportClass::Regular, true),
            DisclosureState::Collapsed
        );
    }

    #[test]
    fn dismissal_is_idempotent() {
        assert_eq!(
            DisclosureState::ExpandedOverlay.dismissed(),
            DisclosureState::Collapsed
        );
        assert_eq!(
            DisclosureState::Collapsed.dismissed(),
            DisclosureState::Collapsed
        );
    }

    fn viewport_strategy() -> impl Strategy<Value = ViewportClass> {
        prop_oneof![
            Just(ViewportClass::Compact),
            Just(ViewportClass::Regular),
        ]
    }

    proptest! {
        /// An even number of toggles from collapsed always lands back on
        /// collapsed, whatever the viewport does in between.
        #[test]
        fn even_toggle_counts_return_to_collapsed(
            viewports in proptest::collection::vec(viewport_strategy(), 0..20)
        ) {
            let mut state = DisclosureState::Collapsed;
            for viewport in &viewports {
                state = state.toggled(*viewport, true);
            }
            for viewport in viewports.iter().rev() {
                // Same count again; parity is what matters, not the classes.
                state = state.toggled(*viewport, true);
            }
            prop_assert_eq!(state, DisclosureState::Collapsed);
        }

        /// Inline expansion is only ever entered from a regular viewport,
        /// the bottom sheet only from a compact one.
        #[test]
        fn expansion_mode_matches_viewport_at_entry(
            viewports in proptest::collection::vec(viewport_strategy(), 1..20)
        ) {
            let mut state = DisclosureState::Collapsed;
            for viewport in viewports {
                let prev = state;
                state = state.toggled(viewport, true);
                if prev == DisclosureState::Collapsed {
                    match viewport {
                        ViewportClass::Regular =>
                            prop_assert_eq!(state, DisclosureState::ExpandedInline),
                        ViewportClass::Compact =>
                            prop_assert_eq!(state, DisclosureState::ExpandedOverlay),
                    }
                } else {
                    prop_assert_eq!(state, DisclosureState::Collapsed);
                }
            }
        }
    }
}
