//! "New chat" control, gated on authentication.

use leptos::prelude::*;

use crate::config::NewChatGate;

/// Starts a fresh conversation by reloading the page. Disabled, greyed, and
/// titled with a login hint when `gate` requires a login.
#[component]
pub fn NewChatButton(gate: NewChatGate) -> impl IntoView {
    let on_click = move |_| {
        if !gate.disabled() {
            reload_page();
        }
    };

    view! {
        <button
            id="new-chat-button"
            class="new-chat-button"
            class:new-chat-button--unavailable=gate.disabled()
            disabled=gate.disabled()
            title=gate.tooltip()
            style=gate.style()
            on:click=on_click
        >
            "New chat"
        </button>
    }
}

fn reload_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::error!("page reload failed: {err:?}");
            }
        }
    }
}
