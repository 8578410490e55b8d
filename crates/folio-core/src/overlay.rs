//! Overlay activation state.
//!
//! Owned by the showcase coordinator and passed down, never shared through a
//! global: two coordinators on one page cannot interfere with each other.

use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;

/// At most one overlay key is active at a time. Activating a new key
/// implicitly deactivates the previous one; there is no stacking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    active_key: Option<String>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `key`, replacing any currently active key.
    pub fn activate(&mut self, key: impl Into<String>) {
        let key = key.into();
        tracing::debug!("overlay activated: {key}");
        self.active_key = Some(key);
    }

    /// Deactivate. Idempotent: clearing an already-clear state is a no-op.
    pub fn clear(&mut self) {
        if let Some(key) = self.active_key.take() {
            tracing::debug!("overlay cleared: {key}");
        }
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.active_key.is_some()
    }

    /// Resolve the active key against the known record set.
    ///
    /// Fails closed: an unknown key, or a key belonging to a display-only
    /// record, resolves to `None` and the overlay renders nothing.
    pub fn resolve<'a>(&self, records: &'a [ContentRecord]) -> Option<&'a ContentRecord> {
        let key = self.active_key.as_deref()?;
        records.iter().find(|r| r.key == key && r.clickable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRecord;

    fn records() -> Vec<ContentRecord> {
        vec![
            ContentRecord::new("a", "Alpha", "First"),
            ContentRecord::new("b", "Beta", "Second"),
            ContentRecord::new("c", "Gamma", "Display only").display_only(),
        ]
    }

    #[test]
    fn starts_closed() {
        let state = OverlayState::new();
        assert!(!state.is_open());
        assert_eq!(state.resolve(&records()), None);
    }

    #[test]
    fn activating_a_second_key_replaces_the_first() {
        let mut state = OverlayState::new();
        state.activate("a");
        state.activate("b");
        assert_eq!(state.active_key(), Some("b"));
        assert_eq!(state.resolve(&records()).map(|r| r.key.as_str()), Some("b"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = OverlayState::new();
        state.activate("a");
        state.clear();
        state.clear();
        assert!(!state.is_open());
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        let mut state = OverlayState::new();
        state.activate("missing");
        assert_eq!(state.resolve(&records()), None);
    }

    #[test]
    fn display_only_record_resolves_to_none() {
        let mut state = OverlayState::new();
        state.activate("c");
        assert!(state.is_open());
        assert_eq!(state.resolve(&records()), None);
    }
}
