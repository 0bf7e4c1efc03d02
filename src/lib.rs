//! # chat-widget
//!
//! Leptos + WASM chat widget mounted into a server-rendered page.
//!
//! The widget renders a message list and input form, exchanges one JSON
//! message per turn with the host's chat endpoint, and keeps two preferences
//! (dark mode, disclaimer acknowledgement) in `localStorage`. The host calls
//! [`mount`] with a JSON [`config::WidgetConfig`].
//!
//! Browser glue is compiled under the `csr` feature. All decision logic lives
//! in `state`, `net` and `util` and runs natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Mount the widget. `config_json` is a [`config::WidgetConfig`] object.
///
/// # Errors
///
/// Rejects with a message if the config is invalid or the mount selector
/// matches no HTML element.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount(config_json: &str) -> Result<(), JsValue> {
    use leptos::prelude::*;

    use crate::app::ChatWidget;
    use crate::config::WidgetConfig;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }

    let config = WidgetConfig::from_json(config_json).map_err(|err| {
        log::warn!("chat widget not mounted: {err}");
        JsValue::from_str(&err.to_string())
    })?;
    log::info!(
        "chat widget mounting: endpoint={} authenticated={}",
        config.endpoint,
        config.authenticated
    );

    match config.mount_selector.clone() {
        Some(selector) => {
            let parent = find_mount_point(&selector)?;
            leptos::mount::mount_to(parent, move || view! { <ChatWidget config=config.clone()/> }).forget();
        }
        None => leptos::mount::mount_to_body(move || view! { <ChatWidget config=config.clone()/> }),
    }
    Ok(())
}

#[cfg(feature = "csr")]
fn find_mount_point(selector: &str) -> Result<web_sys::HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("mount point not found: {selector}")))?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("mount point is not an HTML element: {selector}")))
}
