//! Root widget component and context providers.

use leptos::prelude::*;

use crate::components::{
    chat_form::ChatForm, disclaimer_overlay::DisclaimerOverlay, message_list::MessageList,
    new_chat_button::NewChatButton, theme_toggle::ThemeToggle,
};
use crate::config::WidgetConfig;
use crate::controller::ChatController;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::preferences::BrowserStore;

/// Root widget component.
///
/// Reads stored preferences once, applies the theme before first paint, and
/// provides the controller and UI state to every child.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let ui = RwSignal::new(UiState::load(&BrowserStore));
    dark_mode::apply(ui.with_untracked(|u| u.dark_mode));

    let controller = ChatController::new(config.endpoint.clone());

    provide_context(ui);
    provide_context(controller);

    let gate = config.new_chat_gate();

    view! {
        <div class="chat-widget">
            <header class="chat-widget__header">
                <h1 class="chat-widget__title">{config.title}</h1>
                <div class="chat-widget__actions">
                    <NewChatButton gate=gate/>
                    <ThemeToggle/>
                </div>
            </header>
            <MessageList/>
            <ChatForm/>
            <DisclaimerOverlay text=config.disclaimer/>
        </div>
    }
}
