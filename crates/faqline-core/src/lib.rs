// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Faqline FAQ engine.
//!
//! This crate provides the message model and error enum shared by the engine
//! and the presentation layer. The engine itself lives in `faqline-engine`.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FaqlineError;
pub use types::{Feedback, Message, MessageId, Sender};
