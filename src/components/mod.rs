//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget chrome and read/write shared state from
//! Leptos context (`ChatController`, `RwSignal<UiState>`).

pub mod chat_form;
pub mod disclaimer_overlay;
pub mod message_list;
pub mod new_chat_button;
pub mod theme_toggle;
