//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so preference and text handling stay testable without a DOM.

pub mod dark_mode;
pub mod preferences;
pub mod text;
