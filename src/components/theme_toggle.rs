//! Dark mode switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::preferences::BrowserStore;

/// Checkbox switch bound to `UiState::dark_mode`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        dark_mode::set(&mut BrowserStore, enabled);
        ui.update(|u| u.dark_mode = enabled);
    };

    view! {
        <label class="toggle" title="Dark mode">
            <input
                class="toggle-switch"
                type="checkbox"
                prop:checked=move || ui.with(|u| u.dark_mode)
                on:change=on_change
            />
            <span class="toggle__slider"></span>
        </label>
    }
}
