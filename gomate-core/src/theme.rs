//! Theme slice.
//!
//! The preference is stored as the literal tokens `"dark"` and `"light"`.

/// Token persisted for dark mode.
pub const DARK_TOKEN: &str = "dark";

/// Token persisted for light mode.
pub const LIGHT_TOKEN: &str = "light";

/// Theme preference. Light until a stored preference is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    /// Dark mode enabled.
    pub dark: bool,
}

/// Transitions of the theme slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Set dark mode on or off.
    Set(bool),
    /// Flip the current mode.
    Toggled,
}

impl ThemeState {
    /// Create the default (light) theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the new state.
    pub fn reduce(self, action: ThemeAction) -> Self {
        match action {
            ThemeAction::Set(dark) => Self { dark },
            ThemeAction::Toggled => Self { dark: !self.dark },
        }
    }

    /// The token to persist for a preference.
    pub fn token_for(dark: bool) -> &'static str {
        if dark {
            DARK_TOKEN
        } else {
            LIGHT_TOKEN
        }
    }

    /// Decode a persisted token. Anything other than `"dark"` means light.
    pub fn from_token(token: &str) -> bool {
        token == DARK_TOKEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        assert!(!ThemeState::new().dark);
    }

    #[test]
    fn set_overrides_current_value() {
        let state = ThemeState::new().reduce(ThemeAction::Set(true));
        assert!(state.dark);
        assert!(!state.reduce(ThemeAction::Set(false)).dark);
    }

    #[test]
    fn toggle_flips() {
        let state = ThemeState::new().reduce(ThemeAction::Toggled);
        assert!(state.dark);
        assert!(!state.reduce(ThemeAction::Toggled).dark);
    }

    #[test]
    fn token_round_trip() {
        for dark in [true, false] {
            assert_eq!(ThemeState::from_token(ThemeState::token_for(dark)), dark);
        }
    }

    #[test]
    fn unknown_token_reads_as_light() {
        assert!(!ThemeState::from_token("DARK"));
        assert!(!ThemeState::from_token(""));
        assert!(!ThemeState::from_token("true"));
    }
}
