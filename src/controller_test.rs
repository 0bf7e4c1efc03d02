#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::chat::{ReplyPhase, Sender};
use crate::state::send_flow::SendPhase;

#[test]
fn submit_renders_user_entry_and_returns_to_idle_on_failure() {
    let controller = ChatController::new("/");
    assert!(controller.submit("  hello  "));

    let state = controller.chat().get_untracked();
    assert_eq!(state.entries().len(), 1);
    assert_eq!(state.entries()[0].text, "hello");
    assert_eq!(state.entries()[0].sender, Sender::User);
    assert_eq!(state.send_phase(), SendPhase::Idle);
    assert_eq!(state.reply_phase(), ReplyPhase::AwaitingFirst);
}

#[test]
fn submit_blank_is_rejected_without_entry() {
    let controller = ChatController::new("/");
    assert!(!controller.submit("   "));
    assert!(controller.chat().get_untracked().entries().is_empty());
}

#[test]
fn repeated_submissions_each_render_once() {
    let controller = ChatController::new("/");
    assert!(controller.submit("one"));
    assert!(controller.submit("two"));
    let state = controller.chat().get_untracked();
    let texts: Vec<_> = state.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
    assert_eq!(state.queued(), 0);
}
