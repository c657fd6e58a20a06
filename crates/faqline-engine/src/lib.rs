// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query resolution and conversation-state engine for Faqline.
//!
//! The engine is deliberately free of any I/O or presentation concern: it
//! owns the knowledge base, the conversation log, the feedback slot, and the
//! unanswered-query log, and exposes a small imperative API the shell (or any
//! other frontend) drives. All state is in-memory and lives for the session.

pub mod conversation;
pub mod knowledge;
pub mod unanswered;

pub use conversation::{ConversationStore, FeedbackSlot};
pub use knowledge::{KnowledgeBase, KnowledgeBaseEntry, MatchOutcome};
pub use unanswered::UnansweredLog;

use std::sync::Arc;
use std::time::Duration;

use faqline_config::model::{EngineConfig, FaqlineConfig};
use faqline_core::{Feedback, FaqlineError, Message, MessageId};
use tokio::time::sleep;
use tracing::info;

/// One interactive FAQ session: knowledge base, conversation, feedback,
/// unanswered log, all behind a single owned handle.
///
/// `submit_query` takes `&mut self` and awaits the reply delay inline, so
/// replies are naturally serialized in submission order; there is no reply
/// queue to reorder.
pub struct FaqSession {
    knowledge: Arc<KnowledgeBase>,
    conversation: ConversationStore,
    unanswered: UnansweredLog,
    response_delay: Duration,
}

impl FaqSession {
    pub fn new(knowledge: Arc<KnowledgeBase>, engine: &EngineConfig) -> Self {
        Self {
            knowledge,
            conversation: ConversationStore::new(),
            unanswered: UnansweredLog::new(),
            response_delay: Duration::from_millis(engine.response_delay_ms),
        }
    }

    /// Builds a session straight from a validated configuration.
    pub fn from_config(config: &FaqlineConfig) -> Self {
        let knowledge = Arc::new(KnowledgeBase::from_config(&config.faq, &config.engine));
        Self::new(knowledge, &config.engine)
    }

    /// Submits a user query and returns the bot's reply message.
    ///
    /// The user message is appended immediately; the reply lands after the
    /// configured delay. Unmatched queries are recorded to the unanswered log
    /// before the delay elapses. Empty or whitespace-only input fails with
    /// `InvalidInput` and changes nothing.
    pub async fn submit_query(&mut self, text: &str) -> Result<Message, FaqlineError> {
        let user_msg = self.conversation.submit_user_message(text)?;
        let outcome = self.knowledge.resolve(text);

        if !outcome.matched {
            self.unanswered.record(text);
        }

        sleep(self.response_delay).await;

        let bot_msg = self
            .conversation
            .submit_bot_message(&outcome.answer, outcome.matched);
        info!(
            query = %user_msg.id,
            reply = %bot_msg.id,
            matched = outcome.matched,
            "query resolved"
        );
        Ok(bot_msg)
    }

    /// Records feedback on the message currently holding the feedback slot.
    pub fn submit_feedback(
        &mut self,
        id: MessageId,
        value: Feedback,
    ) -> Result<(), FaqlineError> {
        self.conversation.record_feedback(id, value)
    }

    /// The full conversation, in display order.
    pub fn snapshot(&self) -> &[Message] {
        self.conversation.snapshot()
    }

    pub fn feedback_slot(&self) -> FeedbackSlot {
        self.conversation.feedback_slot()
    }

    /// Queries that produced the fallback answer, oldest first.
    pub fn unanswered(&self) -> &[String] {
        self.unanswered.all()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}
