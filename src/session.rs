//! Headless state of the chat widget.
//!
//! The UI layer owns one [`ChatSession`] and forwards user actions to it. Every change to
//! the message list is mirrored into the session's [`ChatHistory`] before the call returns.

use crate::history::ChatHistory;
use crate::ids::MessageIdGenerator;
use crate::prompt::{compose_query, is_clear_command};
use crate::types::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    OpenIdle,
    OpenAwaitingResponse,
}

/// A request issued by [`ChatSession::submit`] that still needs a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub query: String,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A reply is already being awaited.
    Busy,
    /// Nothing but whitespace in the input.
    Empty,
    /// The clear command wiped the history.
    Cleared,
    Dispatch(PendingReply),
}

pub struct ChatSession {
    history: ChatHistory,
    messages: Vec<Message>,
    ids: MessageIdGenerator,
    input: String,
    open: bool,
    loading: bool,
    // Bumped on every clear so replies to requests issued before it are dropped.
    generation: u64,
}

impl ChatSession {
    /// Restore whatever the history holds and start with the panel closed.
    pub fn restore(history: ChatHistory) -> Self {
        let messages = history.load();
        let last_id = messages.iter().map(|msg| msg.id).max().unwrap_or_default();
        tracing::debug!(restored = messages.len(), key = history.key(), "chat history loaded");
        Self {
            history,
            messages,
            ids: MessageIdGenerator::starting_after(last_id),
            input: String::new(),
            open: false,
            loading: false,
            generation: 0,
        }
    }

    pub fn state(&self) -> PanelState {
        match (self.open, self.loading) {
            (false, _) => PanelState::Closed,
            (true, false) => PanelState::OpenIdle,
            (true, true) => PanelState::OpenAwaitingResponse,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the panel. An in-flight request keeps running.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.loading {
            return;
        }
        self.input = text.into();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Busy;
        }
        if self.input.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        if is_clear_command(&self.input) {
            self.clear_history();
            return SubmitOutcome::Cleared;
        }

        let text = std::mem::take(&mut self.input);
        let query = compose_query(&text, &self.messages);
        let id = self.ids.next_id();
        self.messages.push(Message::user(id, text));
        self.history.save(&self.messages);
        self.loading = true;

        SubmitOutcome::Dispatch(PendingReply {
            query,
            generation: self.generation,
        })
    }

    /// Append the assistant's reply to `pending`.
    ///
    /// Returns `false` without touching the history when the history was cleared after the
    /// request went out, or when nothing is awaiting a reply.
    pub fn settle(&mut self, pending: &PendingReply, reply: impl Into<String>) -> bool {
        if !self.loading {
            tracing::debug!("dropping reply with no request in flight");
            return false;
        }
        if pending.generation != self.generation {
            tracing::debug!("dropping reply to a request issued before the history was cleared");
            return false;
        }
        let id = self.ids.next_id();
        self.messages.push(Message::assistant(id, reply));
        self.history.save(&self.messages);
        self.loading = false;
        true
    }

    /// Empty the list and delete the stored snapshot.
    pub fn clear_history(&mut self) {
        self.messages.clear();
        self.history.clear();
        self.input.clear();
        self.loading = false;
        self.generation += 1;
    }
}
