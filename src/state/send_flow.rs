//! Submission state machine: `Idle -> Submitting -> AwaitingReply -> Idle`.
//!
//! DESIGN
//! ======
//! At most one request is in flight. Submissions made while a reply is
//! pending are queued FIFO and dispatched as each exchange settles, so
//! replies always arrive in submission order.

#[cfg(test)]
#[path = "send_flow_test.rs"]
mod send_flow_test;

use std::collections::VecDeque;

/// Where the flow stands relative to the network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Idle,
    /// Accepted; the request is about to be issued.
    Submitting,
    /// A request is in flight.
    AwaitingReply,
}

/// Outcome of a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Empty after trimming. Nothing rendered, nothing sent.
    Rejected,
    /// Send this text now.
    Dispatch(String),
    /// Accepted and held until the in-flight exchange settles.
    Queued(String),
}

impl Submit {
    /// The trimmed text to render as the user's entry, if accepted.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Rejected => None,
            Self::Dispatch(text) | Self::Queued(text) => Some(text.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SendFlow {
    phase: SendPhase,
    queue: VecDeque<String>,
}

impl SendFlow {
    pub fn phase(&self) -> SendPhase {
        self.phase
    }

    /// Number of accepted messages waiting for their turn.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Trim `raw` and decide whether to send, queue, or reject it.
    pub fn submit(&mut self, raw: &str) -> Submit {
        let text = raw.trim();
        if text.is_empty() {
            return Submit::Rejected;
        }
        let text = text.to_owned();
        if self.phase == SendPhase::Idle {
            self.phase = SendPhase::Submitting;
            Submit::Dispatch(text)
        } else {
            self.queue.push_back(text.clone());
            Submit::Queued(text)
        }
    }

    /// The request for the current submission has been issued.
    pub fn dispatched(&mut self) {
        if self.phase == SendPhase::Submitting {
            self.phase = SendPhase::AwaitingReply;
        }
    }

    /// The in-flight exchange finished, successfully or not.
    ///
    /// Returns the next queued message, which the caller must dispatch.
    pub fn settle(&mut self) -> Option<String> {
        match self.queue.pop_front() {
            Some(next) => {
                self.phase = SendPhase::Submitting;
                Some(next)
            }
            None => {
                self.phase = SendPhase::Idle;
                None
            }
        }
    }
}
