//! Mobile navigation menu state machine.
//!
//! Two states, two transitions:
//!
//! ```text
//!            toggle
//!   Closed ---------> Open
//!     ^                 |
//!     +-----------------+
//!      toggle | close
//! ```
//!
//! `close` on `Closed` stays `Closed`.

use serde::Serialize;

/// Whether the mobile navigation panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Panel hidden (initial state)
    #[default]
    Closed,
    /// Panel shown over the page
    Open,
}

impl MenuState {
    /// Menu button pressed.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// A navigation link was followed.
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    /// True while the panel is shown.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Value for the panel's `data-menu-state` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MenuState; 2] = [MenuState::Closed, MenuState::Open];

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_parity() {
        let mut state = MenuState::default();
        for n in 1..=10 {
            state = state.toggle();
            assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
        }
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn close_always_closes() {
        for state in ALL {
            assert_eq!(state.close(), MenuState::Closed);
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        for state in ALL {
            assert_eq!(state.toggle().toggle(), state);
            assert_ne!(state.toggle(), state);
        }
    }

    #[test]
    fn attribute_values() {
        assert_eq!(MenuState::Closed.as_str(), "closed");
        assert_eq!(MenuState::Open.as_str(), "open");
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
    }
}
