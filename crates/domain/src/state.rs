//! Navigator state for UI binding.
//!
//! The active link is modeled as an explicit state record rather than being
//! scattered across presentation attributes; the presenter projects this
//! record onto whatever rendering technology hosts the page.

use serde::{Deserialize, Serialize};

use crate::id::SectionId;

/// The navigator's only mutable state: which section is currently active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    /// Section whose navigation link is currently highlighted.
    ///
    /// `None` until the first activation; scrolling a page with zero
    /// sections never assigns it.
    pub active_section: Option<SectionId>,
}

impl NavigatorState {
    /// Makes the given section the active one.
    ///
    /// Returns `true` when the active section actually changed, so callers
    /// can log transitions without diffing. Re-activating the current
    /// section is a no-op, which makes the procedure idempotent.
    pub fn activate(&mut self, id: SectionId) -> bool {
        if self.active_section.as_ref() == Some(&id) {
            return false;
        }
        self.active_section = Some(id);
        true
    }

    /// Returns true if the given section is the active one.
    #[must_use]
    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active_section.as_ref() == Some(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> SectionId {
        SectionId::parse(s).unwrap()
    }

    #[test]
    fn test_initial_state_has_no_active_section() {
        let state = NavigatorState::default();
        assert!(state.active_section.is_none());
        assert!(!state.is_active(&id("home")));
    }

    #[test]
    fn test_activate_reports_transition() {
        let mut state = NavigatorState::default();
        assert!(state.activate(id("home")));
        assert!(state.is_active(&id("home")));
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut state = NavigatorState::default();
        state.activate(id("about"));
        assert!(!state.activate(id("about")));
        assert!(state.is_active(&id("about")));
    }

    #[test]
    fn test_activate_reassigns_active_section() {
        let mut state = NavigatorState::default();
        state.activate(id("home"));
        assert!(state.activate(id("about")));
        assert!(!state.is_active(&id("home")));
        assert!(state.is_active(&id("about")));
    }
}
