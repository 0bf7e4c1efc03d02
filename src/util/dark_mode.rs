//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from a [`PreferenceStore`] and applies the
//! `dark-mode` class to `<body>`. Enabling writes `"true"` back; disabling
//! removes the key entirely so an absent key and "off" are the same state.
//!
//! TRADE-OFFS
//! ==========
//! The class update is browser-only behavior; native builds no-op so state
//! logic stays testable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::preferences::{DARK_MODE_KEY, PreferenceStore, enable, is_enabled};

/// Class toggled on `<body>` while dark mode is on.
pub const THEME_CLASS: &str = "dark-mode";

/// Read the dark mode preference.
pub fn read_preference(store: &impl PreferenceStore) -> bool {
    is_enabled(store, DARK_MODE_KEY)
}

/// Apply or clear the theme class on `<body>`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(err) = body.class_list().toggle_with_force(THEME_CLASS, enabled) {
            log::warn!("theme class update failed: {err:?}");
        }
    }
}

/// Apply `enabled` and persist it.
pub fn set(store: &mut impl PreferenceStore, enabled: bool) {
    apply(enabled);
    if enabled {
        enable(store, DARK_MODE_KEY);
    } else {
        store.remove(DARK_MODE_KEY);
    }
}
