//! One-time disclaimer overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dismissal always fades the overlay out for this page view. Only a checked
//! "don't show again" box persists the acknowledgement for later loads.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::preferences::BrowserStore;

#[cfg(feature = "csr")]
const FADE_OUT_MS: u64 = 500;

/// Fullscreen disclaimer with acknowledge button and opt-out checkbox.
#[component]
pub fn DisclaimerOverlay(text: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dont_show_again = RwSignal::new(false);

    let on_acknowledge = move |_| {
        ui.update(|u| u.acknowledge(&mut BrowserStore, dont_show_again.get_untracked()));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FADE_OUT_MS)).await;
            ui.update(|u| u.overlay.finish_fade());
        });
    };

    let overlay = move || ui.with(|u| u.overlay);

    view! {
        <div
            id="overlay"
            class="overlay"
            class:fade-out=move || overlay().is_fading()
            style:display=move || if overlay().is_displayed() { "flex" } else { "none" }
        >
            <div class="overlay__content" role="dialog" aria-modal="true">
                <h2 class="overlay__title">"Disclaimer"</h2>
                <p class="overlay__text">{text}</p>
                <label class="overlay__opt-out">
                    <input
                        id="dontShowAgainCheckbox"
                        type="checkbox"
                        prop:checked=move || dont_show_again.get()
                        on:change=move |ev| dont_show_again.set(event_target_checked(&ev))
                    />
                    "Don't show this again"
                </label>
                <button id="acknowledgeButton" class="btn btn--primary" on:click=on_acknowledge>
                    "I understand"
                </button>
            </div>
        </div>
    }
}
