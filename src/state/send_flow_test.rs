use super::*;

// =============================================================
// submit guard
// =============================================================

#[test]
fn submit_rejects_empty_and_whitespace() {
    let mut flow = SendFlow::default();
    assert_eq!(flow.submit(""), Submit::Rejected);
    assert_eq!(flow.submit("   \t\n "), Submit::Rejected);
    assert_eq!(flow.phase(), SendPhase::Idle);
    assert_eq!(flow.queued(), 0);
}

#[test]
fn submit_trims_and_dispatches_when_idle() {
    let mut flow = SendFlow::default();
    assert_eq!(flow.submit("  AAPL price \n"), Submit::Dispatch("AAPL price".to_owned()));
    assert_eq!(flow.phase(), SendPhase::Submitting);
}

#[test]
fn submit_keeps_interior_newlines() {
    let mut flow = SendFlow::default();
    assert_eq!(flow.submit("line1\nline2"), Submit::Dispatch("line1\nline2".to_owned()));
}

// =============================================================
// phase transitions
// =============================================================

#[test]
fn full_cycle_returns_to_idle() {
    let mut flow = SendFlow::default();
    flow.submit("hi");
    flow.dispatched();
    assert_eq!(flow.phase(), SendPhase::AwaitingReply);
    assert_eq!(flow.settle(), None);
    assert_eq!(flow.phase(), SendPhase::Idle);
}

#[test]
fn dispatched_is_ignored_when_idle() {
    let mut flow = SendFlow::default();
    flow.dispatched();
    assert_eq!(flow.phase(), SendPhase::Idle);
}

// =============================================================
// serialization
// =============================================================

#[test]
fn submit_while_awaiting_reply_queues() {
    let mut flow = SendFlow::default();
    flow.submit("first");
    flow.dispatched();
    assert_eq!(flow.submit("second"), Submit::Queued("second".to_owned()));
    assert_eq!(flow.submit("third"), Submit::Queued("third".to_owned()));
    assert_eq!(flow.queued(), 2);
    assert_eq!(flow.phase(), SendPhase::AwaitingReply);
}

#[test]
fn settle_dispatches_queue_in_submission_order() {
    let mut flow = SendFlow::default();
    flow.submit("first");
    flow.dispatched();
    flow.submit("second");
    flow.submit("third");

    assert_eq!(flow.settle().as_deref(), Some("second"));
    assert_eq!(flow.phase(), SendPhase::Submitting);
    flow.dispatched();
    assert_eq!(flow.settle().as_deref(), Some("third"));
    flow.dispatched();
    assert_eq!(flow.settle(), None);
    assert_eq!(flow.phase(), SendPhase::Idle);
}

#[test]
fn rejected_submission_does_not_touch_queue() {
    let mut flow = SendFlow::default();
    flow.submit("first");
    flow.dispatched();
    assert_eq!(flow.submit("  "), Submit::Rejected);
    assert_eq!(flow.queued(), 0);
}

#[test]
fn submit_text_exposes_accepted_text_only() {
    assert_eq!(Submit::Rejected.text(), None);
    assert_eq!(Submit::Dispatch("a".to_owned()).text(), Some("a"));
    assert_eq!(Submit::Queued("b".to_owned()).text(), Some("b"));
}
