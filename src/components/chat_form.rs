//! Message input form.

use leptos::prelude::*;

use crate::controller::ChatController;

/// Input form. Enter submits; Shift+Enter inserts a newline.
#[component]
pub fn ChatForm() -> impl IntoView {
    let controller = expect_context::<ChatController>();
    let input = RwSignal::new(String::new());

    let do_send = move || {
        if controller.submit(&input.get_untracked()) {
            input.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <form class="input-form" on:submit=on_submit>
            <textarea
                class="input"
                rows="1"
                placeholder="Type a message..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button class="btn btn--primary send-button" type="submit">
                "Send"
            </button>
        </form>
    }
}
