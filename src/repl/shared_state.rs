use std::sync::{Arc, RwLock};

use crate::theme::{Palette, Theme};

/// Shared state between the REPL loop, the line-editor helper and the
/// theme listener.
///
/// The event model is single-threaded; the locks exist because the line
/// editor requires its helper to be shareable, not because two writers
/// ever race.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// Active theme.
    theme: Arc<RwLock<Theme>>,

    /// Color output setting.
    color_enabled: Arc<RwLock<bool>>,
}

impl SharedState {
    /// Create a new shared state.
    ///
    /// * `theme` - Initially active theme (as loaded from the store)
    /// * `color_enabled` - Whether ANSI colors are emitted at all
    pub fn new(theme: Theme, color_enabled: bool) -> Self {
        Self {
            theme: Arc::new(RwLock::new(theme)),
            color_enabled: Arc::new(RwLock::new(color_enabled)),
        }
    }

    /// Get the active theme.
    pub fn get_theme(&self) -> Theme {
        *self.theme.read().unwrap()
    }

    /// Apply a new theme.
    pub fn set_theme(&self, theme: Theme) {
        *self.theme.write().unwrap() = theme;
    }

    /// Styles for the active theme.
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.get_theme())
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self.color_enabled.read().unwrap()
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self.color_enabled.write().unwrap() = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_roundtrip() {
        let state = SharedState::new(Theme::System, true);
        assert_eq!(state.get_theme(), Theme::System);

        state.set_theme(Theme::Dark);
        assert_eq!(state.get_theme(), Theme::Dark);
    }

    #[test]
    fn test_clones_share_state() {
        let state = SharedState::new(Theme::System, true);
        let clone = state.clone();

        clone.set_theme(Theme::Light);
        assert_eq!(state.get_theme(), Theme::Light);
    }

    #[test]
    fn test_color_toggle() {
        let state = SharedState::new(Theme::Dark, true);
        state.set_color_enabled(false);
        assert!(!state.get_color_enabled());
    }
}
