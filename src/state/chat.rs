//! Conversation state for the message panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the append-only entry list, the send-flow state machine, and the
//! session-scoped "first reply" phase that gates the unauthenticated notice.
//! Reply rendering is a pure planning step ([`plan_reply`]) applied here.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::send_flow::{SendFlow, SendPhase, Submit};
use crate::net::api::ApiError;
use crate::net::types::ChatReply;
use crate::util::text::split_lines;

/// Text colour of the unauthenticated notice.
pub const NOTICE_COLOR: &str = "#E2694F";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// How an entry's text is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Newline sequences become line breaks.
    Message,
    /// Plain text in the warning colour.
    Notice,
}

/// A single rendered entry. Never edited once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub kind: EntryKind,
}

impl ChatEntry {
    pub fn css_class(&self) -> &'static str {
        match self.sender {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }

    /// Visual lines of this entry. Notices are never split.
    pub fn lines(&self) -> Vec<&str> {
        match self.kind {
            EntryKind::Message => split_lines(&self.text),
            EntryKind::Notice => vec![self.text.as_str()],
        }
    }
}

/// Whether a notice-bearing reply has been rendered this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplyPhase {
    #[default]
    AwaitingFirst,
    Seen,
}

/// One append produced by a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderAction {
    Notice(String),
    Bot(String),
}

/// Plan the entries a reply produces and the phase that follows it.
pub fn plan_reply(phase: ReplyPhase, reply: &ChatReply) -> (Vec<RenderAction>, ReplyPhase) {
    let mut actions = Vec::with_capacity(2);
    let mut next = phase;
    if phase == ReplyPhase::AwaitingFirst {
        if let Some(notice) = reply.notice() {
            actions.push(RenderAction::Notice(notice.to_owned()));
            next = ReplyPhase::Seen;
        }
    }
    actions.push(RenderAction::Bot(reply.content().to_owned()));
    (actions, next)
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    entries: Vec<ChatEntry>,
    next_id: u64,
    phase: ReplyPhase,
    flow: SendFlow,
}

impl ChatState {
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn reply_phase(&self) -> ReplyPhase {
        self.phase
    }

    pub fn send_phase(&self) -> SendPhase {
        self.flow.phase()
    }

    pub fn queued(&self) -> usize {
        self.flow.queued()
    }

    /// Append a line-break converted message and return its id.
    pub fn append(&mut self, text: &str, sender: Sender) -> u64 {
        self.push(text, sender, EntryKind::Message)
    }

    /// Append a plain-text warning, styled as a bot entry.
    pub fn append_notice(&mut self, text: &str) -> u64 {
        self.push(text, Sender::Bot, EntryKind::Notice)
    }

    fn push(&mut self, text: &str, sender: Sender, kind: EntryKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ChatEntry {
            id,
            text: text.to_owned(),
            sender,
            kind,
        });
        id
    }

    /// Handle a form submission.
    ///
    /// Accepted text is rendered as the user's entry before any network
    /// activity; the caller dispatches on [`Submit::Dispatch`].
    pub fn submit(&mut self, raw: &str) -> Submit {
        let outcome = self.flow.submit(raw);
        if let Some(text) = outcome.text() {
            self.append(text, Sender::User);
        }
        outcome
    }

    pub fn mark_dispatched(&mut self) {
        self.flow.dispatched();
    }

    /// Render a decoded reply.
    pub fn apply_reply(&mut self, reply: &ChatReply) {
        let (actions, next) = plan_reply(self.phase, reply);
        for action in actions {
            match action {
                RenderAction::Notice(text) => self.append_notice(&text),
                RenderAction::Bot(text) => self.append(&text, Sender::Bot),
            };
        }
        self.phase = next;
    }

    /// Finish the in-flight exchange.
    ///
    /// A failure renders nothing and leaves the reply phase untouched.
    /// Returns the next queued message to dispatch.
    pub fn settle(&mut self, result: Result<ChatReply, ApiError>) -> Option<String> {
        if let Ok(reply) = result {
            self.apply_reply(&reply);
        }
        self.flow.settle()
    }
}
