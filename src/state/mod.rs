//! Shared widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `send_flow`, `overlay`, `ui`) so each
//! component depends on a small focused model. None of these types touch the
//! DOM; components hold them in `RwSignal`s.

pub mod chat;
pub mod overlay;
pub mod send_flow;
pub mod ui;
