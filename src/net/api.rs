//! HTTP exchange with the chat endpoint.
//!
//! Client-side (csr): a real `fetch` via `gloo-net`.
//! Native builds: always [`ApiError::Unavailable`], since there is no
//! browser network stack to drive.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`] value. The send flow logs it
//! and moves on; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ChatReply;
#[cfg(feature = "csr")]
use super::types::ChatRequest;

/// Why a chat exchange produced no reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("decode reply: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Decode a reply body. HTTP status is not consulted; any JSON body counts.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `body` is not a JSON object.
pub fn decode_reply(body: &str) -> Result<ChatReply, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send `message` to `endpoint` as `{"message": ...}` and decode the reply.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request cannot be built, the network call
/// fails, or the body is not valid JSON.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn send_message(endpoint: &str, message: &str) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&ChatRequest { message })
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        if status >= 400 {
            log::debug!("chat endpoint answered {status}; decoding body anyway");
        }
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_reply(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}
