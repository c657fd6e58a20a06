// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Faqline FAQ engine.

use thiserror::Error;

use crate::types::MessageId;

/// The primary error type used across all Faqline crates.
///
/// The three feedback/input variants are local validation failures: the
/// presentation layer is expected to prevent them (disable empty submission,
/// only offer feedback controls for the open slot), and none of them are
/// fatal to the process.
#[derive(Debug, Error)]
pub enum FaqlineError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A submitted query was empty or whitespace-only.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Feedback was submitted for a message id that does not exist.
    #[error("unknown message: {id}")]
    UnknownMessage { id: MessageId },

    /// Feedback was submitted for a message that is not the currently open
    /// feedback slot (never eligible, already answered, or superseded).
    #[error("message {id} is not eligible for feedback")]
    NotEligible { id: MessageId },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_id() {
        let err = FaqlineError::UnknownMessage { id: MessageId(7) };
        assert_eq!(err.to_string(), "unknown message: 7");

        let err = FaqlineError::NotEligible { id: MessageId(3) };
        assert_eq!(err.to_string(), "message 3 is not eligible for feedback");
    }

    #[test]
    fn invalid_input_carries_reason() {
        let err = FaqlineError::InvalidInput {
            reason: "query is empty".into(),
        };
        assert!(err.to_string().contains("query is empty"));
    }
}
