//! Widget controller driving the send flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once by the root component and provided through context.
//! Components call [`ChatController::submit`]; the controller renders the
//! user entry, issues the POST, and feeds the outcome back into
//! [`ChatState`], dispatching queued submissions one at a time.
//!
//! ERROR HANDLING
//! ==============
//! Exchange failures are logged to the console and otherwise absorbed. They
//! never render an entry and never disturb the reply phase.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
#[cfg(feature = "csr")]
use crate::net::api::send_message;
use crate::net::types::ChatReply;
use crate::state::chat::ChatState;
use crate::state::send_flow::Submit;

#[derive(Clone, Copy)]
pub struct ChatController {
    chat: RwSignal<ChatState>,
    endpoint: StoredValue<String>,
}

impl ChatController {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            chat: RwSignal::new(ChatState::default()),
            endpoint: StoredValue::new(endpoint.into()),
        }
    }

    pub fn chat(self) -> RwSignal<ChatState> {
        self.chat
    }

    /// Handle a form submission. Returns `true` if the text was accepted,
    /// in which case the caller clears the input.
    pub fn submit(self, raw: &str) -> bool {
        let Some(outcome) = self.chat.try_update(|c| c.submit(raw)) else {
            return false;
        };
        match outcome {
            Submit::Rejected => false,
            Submit::Dispatch(text) => {
                self.dispatch(text);
                true
            }
            Submit::Queued(_) => {
                #[cfg(feature = "csr")]
                log::debug!("chat request queued behind in-flight exchange");
                true
            }
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn dispatch(self, text: String) {
        self.chat.update(ChatState::mark_dispatched);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let endpoint = self.endpoint.get_value();
            log::debug!("chat request dispatched: endpoint={endpoint}");
            let result = send_message(&endpoint, &text).await;
            self.settle(result);
        });

        #[cfg(not(feature = "csr"))]
        self.settle(Err(ApiError::Unavailable));
    }

    fn settle(self, result: Result<ChatReply, ApiError>) {
        if let Err(err) = &result {
            leptos::logging::error!("Error: {err}");
        }
        if let Some(next) = self.chat.try_update(|c| c.settle(result)).flatten() {
            self.dispatch(next);
        }
    }
}
