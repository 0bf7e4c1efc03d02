//! Local UI chrome state (theme, disclaimer overlay).
//!
//! DESIGN
//! ======
//! Both the theme class and the toggle's checked state derive from
//! `dark_mode`, so the two cannot disagree after load.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::overlay::OverlayState;
use crate::util::dark_mode;
use crate::util::preferences::{ACKNOWLEDGED_KEY, PreferenceStore, enable, is_enabled};

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub overlay: OverlayState,
}

impl UiState {
    /// Read stored preferences once at page load.
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            dark_mode: dark_mode::read_preference(store),
            overlay: OverlayState::at_load(is_enabled(store, ACKNOWLEDGED_KEY)),
        }
    }
    /// Dismiss the disclaimer. A checked "don't show again" box persists the
    /// acknowledgement so later loads start hidden.
    pub fn acknowledge(&mut self, store: &mut impl PreferenceStore, dont_show_again: bool) {
        if self.overlay.acknowledge(dont_show_again) {
            enable(store, ACKNOWLEDGED_KEY);
        }
    }
}
