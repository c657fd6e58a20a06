// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the engine and the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a message within one conversation.
///
/// Ids are assigned by the conversation store and are strictly increasing in
/// creation order, so "most recent message" is well-defined without scanning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// A user's judgment of a bot answer.
///
/// A message starts with no feedback; once recorded, the value is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

/// One entry in the conversation log.
///
/// Created once by the conversation store; `feedback` is the only field ever
/// mutated after creation, and only from `None` to a terminal value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
    /// Whether this bot message was a genuine knowledge-base match rather
    /// than the fallback. `None` for user messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_answered: Option<bool>,
    /// Recorded user feedback, if any. Only bot messages can receive it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn message_ids_order_by_value() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(MessageId(5).to_string(), "5");
    }

    #[test]
    fn sender_round_trips_through_strings() {
        for sender in [Sender::User, Sender::Bot] {
            let s = sender.to_string();
            assert_eq!(Sender::from_str(&s).unwrap(), sender);
        }
        assert_eq!(Sender::Bot.to_string(), "bot");
    }

    #[test]
    fn feedback_serializes_snake_case() {
        let json = serde_json::to_string(&Feedback::NotHelpful).unwrap();
        assert_eq!(json, "\"not_helpful\"");
        let parsed: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Feedback::NotHelpful);
    }

    #[test]
    fn message_omits_absent_optional_fields() {
        let msg = Message {
            id: MessageId(1),
            text: "hello".into(),
            sender: Sender::User,
            created_at: Utc::now(),
            is_answered: None,
            feedback: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("is_answered"));
        assert!(!json.contains("feedback"));
    }
}
