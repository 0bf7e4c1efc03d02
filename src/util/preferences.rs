//! Durable per-origin preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences are string values stored by key. The browser implementation
//! writes through to `localStorage`; native builds and tests use an in-memory
//! map with the same contract.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort. A blocked or full `localStorage` degrades to
//! "preference unset" instead of failing widget startup.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::collections::HashMap;

/// Key holding the dark-mode preference.
pub const DARK_MODE_KEY: &str = "dark-mode";

/// Key holding the disclaimer acknowledgement.
pub const ACKNOWLEDGED_KEY: &str = "acknowledged";

const ENABLED: &str = "true";

/// Key-value storage that outlives the page session.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// Returns `true` only when `key` holds exactly `"true"`.
pub fn is_enabled(store: &impl PreferenceStore, key: &str) -> bool {
    store.get(key).is_some_and(|value| value == ENABLED)
}

/// Persist `key` as enabled.
pub fn enable(store: &mut impl PreferenceStore, key: &str) {
    store.set(key, ENABLED);
}

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("localStorage read failed: key={key} err={err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("localStorage write failed: key={key} err={err:?}");
                }
            }
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(err) = storage.remove_item(key) {
                    log::warn!("localStorage remove failed: key={key} err={err:?}");
                }
            }
        }
    }
}

/// In-memory store for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
