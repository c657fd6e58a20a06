// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation log and the feedback slot.
//!
//! `ConversationStore` is the system of record for chat history: an ordered,
//! append-only sequence of messages with strictly increasing ids. At most one
//! bot message is eligible for feedback at any time; the slot is an explicit
//! two-state machine (`Empty` / `Open`), not a flag plus a nullable id, so
//! there is never ambiguity about which message is eligible.

use chrono::Utc;
use faqline_core::{Feedback, FaqlineError, Message, MessageId, Sender};
use tracing::debug;

/// The single outstanding feedback request, if any.
///
/// Invariant: `Open(id)` only ever refers to a bot message in the log with
/// `is_answered = Some(true)` and no feedback recorded yet. Opening a new
/// slot silently discards the previous one -- only the most recent answer is
/// ever eligible, matching the idea that feedback reflects on the latest
/// exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackSlot {
    #[default]
    Empty,
    Open(MessageId),
}

impl FeedbackSlot {
    /// Returns the open message id, if the slot is open.
    pub fn open_id(self) -> Option<MessageId> {
        match self {
            FeedbackSlot::Empty => None,
            FeedbackSlot::Open(id) => Some(id),
        }
    }
}

/// Ordered, append-only log of user and bot messages.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    next_id: u64,
    slot: FeedbackSlot,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message and returns it.
    ///
    /// Fails with `InvalidInput` when the text is empty or whitespace-only;
    /// the log is left unchanged in that case. The presentation layer is
    /// expected to prevent this by disabling empty submission.
    pub fn submit_user_message(&mut self, text: &str) -> Result<Message, FaqlineError> {
        if text.trim().is_empty() {
            return Err(FaqlineError::InvalidInput {
                reason: "query is empty or whitespace-only".to_string(),
            });
        }

        let msg = Message {
            id: self.allocate_id(),
            text: text.to_string(),
            sender: Sender::User,
            created_at: Utc::now(),
            is_answered: None,
            feedback: None,
        };
        debug!(id = %msg.id, "user message appended");
        self.messages.push(msg.clone());
        Ok(msg)
    }

    /// Appends a bot message and returns it.
    ///
    /// When `is_answered` is true the feedback slot opens on this message,
    /// replacing any previously open slot. A fallback reply never opens the
    /// slot.
    pub fn submit_bot_message(&mut self, text: &str, is_answered: bool) -> Message {
        let msg = Message {
            id: self.allocate_id(),
            text: text.to_string(),
            sender: Sender::Bot,
            created_at: Utc::now(),
            is_answered: Some(is_answered),
            feedback: None,
        };

        if is_answered {
            if let FeedbackSlot::Open(prior) = self.slot {
                debug!(superseded = %prior, "feedback slot superseded without feedback");
            }
            self.slot = FeedbackSlot::Open(msg.id);
        }

        debug!(id = %msg.id, is_answered, "bot message appended");
        self.messages.push(msg.clone());
        msg
    }

    /// Records feedback for the currently open slot.
    ///
    /// Fails with `UnknownMessage` if no message carries the id, and with
    /// `NotEligible` if the slot does not currently hold the id -- feedback
    /// can only ever target the single open slot. On success the message's
    /// feedback transitions from `None` to the terminal value and the slot
    /// closes.
    pub fn record_feedback(
        &mut self,
        id: MessageId,
        value: Feedback,
    ) -> Result<(), FaqlineError> {
        let Some(index) = self.messages.iter().position(|m| m.id == id) else {
            return Err(FaqlineError::UnknownMessage { id });
        };

        if self.slot != FeedbackSlot::Open(id) {
            return Err(FaqlineError::NotEligible { id });
        }

        // The slot invariant guarantees this message is an answered bot
        // message with feedback still unset.
        self.messages[index].feedback = Some(value);
        self.slot = FeedbackSlot::Empty;
        debug!(id = %id, %value, "feedback recorded");
        Ok(())
    }

    /// Read-only view of the full log, in display order.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    /// The current feedback slot state.
    pub fn feedback_slot(&self) -> FeedbackSlot {
        self.slot
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
