//! Wire types for the chat endpoint.
//!
//! DESIGN
//! ======
//! Reply fields decode permissively. The server is an opaque collaborator, so
//! a missing, `null`, or non-string field falls back to a default and never
//! fails the exchange on its own.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST <endpoint>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Body returned by the chat endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Bot reply text. May contain newlines.
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    /// One-time warning for unauthenticated sessions.
    #[serde(default, deserialize_with = "lenient_string")]
    pub not_auth_msg: Option<String>,
}

/// Keep string values; any other JSON value decodes as `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

impl ChatReply {
    /// Reply text, empty when the server omitted it.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// The unauthenticated notice, treating an empty string as absent.
    pub fn notice(&self) -> Option<&str> {
        self.not_auth_msg.as_deref().filter(|msg| !msg.is_empty())
    }
}
