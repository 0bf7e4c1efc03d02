//! Networking for the single chat exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the POST and decodes the reply; `types` defines the JSON
//! shapes both sides agree on.

pub mod api;
pub mod types;
