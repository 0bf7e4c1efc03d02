//! Mount-time configuration supplied by the hosting page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the page (and knows whether the visitor is logged in);
//! the widget only receives an explicit [`WidgetConfig`]. Nothing here reads
//! page globals.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Tooltip on the "new chat" button for unauthenticated visitors.
pub const NEW_CHAT_LOGIN_REQUIRED: &str = "You need to be logged in to make a new chat.";

const DEFAULT_DISCLAIMER: &str = "Replies are generated automatically from public market data and may be \
incomplete or out of date. Nothing shown here is financial advice.";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("widget config endpoint must not be empty")]
    EmptyEndpoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Whether the visitor is logged in. Read once at mount.
    #[serde(alias = "isUserAuthenticated")]
    pub authenticated: bool,
    /// Path or URL that accepts the chat POST.
    pub endpoint: String,
    /// Heading shown above the message list.
    pub title: String,
    /// Body of the one-time disclaimer overlay.
    pub disclaimer: String,
    /// CSS selector of the element to mount into; `<body>` when unset.
    #[serde(alias = "mountSelector")]
    pub mount_selector: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            authenticated: false,
            endpoint: "/".to_owned(),
            title: "Chat".to_owned(),
            disclaimer: DEFAULT_DISCLAIMER.to_owned(),
            mount_selector: None,
        }
    }
}

impl WidgetConfig {
    /// Parse the JSON object passed to `mount`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or an empty endpoint.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        Ok(config)
    }

    pub fn new_chat_gate(&self) -> NewChatGate {
        if self.authenticated {
            NewChatGate::Available
        } else {
            NewChatGate::LoginRequired
        }
    }
}

/// Whether the "new chat" control may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewChatGate {
    Available,
    LoginRequired,
}

impl NewChatGate {
    pub fn disabled(self) -> bool {
        self == Self::LoginRequired
    }

    pub fn tooltip(self) -> Option<&'static str> {
        match self {
            Self::Available => None,
            Self::LoginRequired => Some(NEW_CHAT_LOGIN_REQUIRED),
        }
    }

    /// Inline style marking the control unavailable.
    pub fn style(self) -> &'static str {
        match self {
            Self::Available => "",
            Self::LoginRequired => "cursor: not-allowed; background-color: grey;",
        }
    }
}
