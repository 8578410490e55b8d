//! Viewport classification.
//!
//! A single breakpoint splits the world into compact (phone-width) and
//! regular layouts. The breakpoint is a design constant, not configuration.

use serde::{Deserialize, Serialize};

/// Widest viewport (logical pixels) still classified as compact.
pub const COMPACT_MAX_WIDTH: f64 = 767.0;

/// Breakpoint class of the current viewport.
///
/// Derived, transient state: each UI component that branches on it owns its
/// own subscription and re-reads on every breakpoint crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    /// Width ≤ [`COMPACT_MAX_WIDTH`]: bottom sheets, single-column grids
    Compact,
    /// Anything wider: inline expansion, multi-column grids
    Regular,
}

impl ViewportClass {
    /// Classify a logical width in pixels.
    pub fn from_width(width: f64) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, ViewportClass::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_breakpoint_boundary() {
        assert_eq!(ViewportClass::from_width(767.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Regular);
    }

    #[test]
    fn classifies_extremes() {
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(1920.0), ViewportClass::Regular);
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Compact);
    }

    #[test]
    fn fractional_widths_just_over_breakpoint_are_regular() {
        assert_eq!(ViewportClass::from_width(767.5), ViewportClass::Regular);
    }
}
