//! Show-more gating for progressive grids.

use serde::{Deserialize, Serialize};

/// Per-grid, transient reveal state for the overflow subset.
/// Independent of overlay state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    expanded: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// A grid with no overflow records omits the toggle control entirely.
    pub fn shows_toggle(self, overflow_len: usize) -> bool {
        overflow_len > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_and_alternates() {
        let mut state = RevealState::new();
        assert!(!state.is_expanded());
        state.toggle();
        assert!(state.is_expanded());
        state.toggle();
        assert!(!state.is_expanded());
    }

    #[test]
    fn toggle_control_omitted_without_overflow() {
        let mut state = RevealState::new();
        assert!(!state.shows_toggle(0));
        state.toggle();
        // Expanding cannot conjure a control for an empty overflow.
        assert!(!state.shows_toggle(0));
        assert!(state.shows_toggle(3));
    }
}
