//! Scrolling, append-only message list keyed by entry id.

use leptos::prelude::*;

use crate::controller::ChatController;
use crate::state::chat::{ChatEntry, EntryKind, NOTICE_COLOR};

/// Message list that keeps the newest entry in view.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<ChatController>().chat();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="messages" node_ref=messages_ref>
            <For
                each=move || chat.with(|c| c.entries().to_vec())
                key=|entry: &ChatEntry| entry.id
                children=|entry: ChatEntry| entry_view(&entry)
            />
        </div>
    }
}

/// One entry. Lines are separate text nodes joined by `<br>`, so no text is
/// ever parsed as markup.
fn entry_view(entry: &ChatEntry) -> impl IntoView + use<> {
    let style = if entry.kind == EntryKind::Notice {
        format!("color: {NOTICE_COLOR};")
    } else {
        String::new()
    };
    let lines = entry
        .lines()
        .into_iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();

    view! {
        <div class=entry.css_class() style=style>
            {lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    view! {
                        {(i > 0).then(|| view! { <br/> })}
                        {line}
                    }
                })
                .collect_view()}
        </div>
    }
}
