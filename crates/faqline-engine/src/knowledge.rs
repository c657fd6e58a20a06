// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The FAQ knowledge base and query resolution.
//!
//! Matching is deliberately simple and auditable: the query is lowercased and
//! each entry matches when any of its keywords is a substring of it. No
//! trimming, no stemming, no tokenization. Entries are scanned in their fixed
//! configuration order and the first match wins, so ordering in the dataset
//! decides precedence for ambiguous queries.

use faqline_config::model::{EngineConfig, FaqEntryConfig};
use tracing::debug;

/// One immutable knowledge base entry: a keyword set and its canonical answer.
///
/// Keywords are lowercase and non-empty; the config layer validates this
/// before a `KnowledgeBase` is ever constructed.
#[derive(Debug, Clone)]
pub struct KnowledgeBaseEntry {
    pub keywords: Vec<String>,
    pub answer: String,
}

/// The outcome of resolving a query.
///
/// Resolution is total: a query that matches nothing still yields the
/// configured fallback answer with `matched = false`. Absence of a match is a
/// normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub answer: String,
    pub matched: bool,
}

/// An immutable, ordered FAQ dataset plus the fallback answer.
///
/// Read-only after construction; owned for the process lifetime.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeBaseEntry>,
    fallback: String,
}

impl KnowledgeBase {
    /// Builds a knowledge base from already-validated config sections.
    pub fn from_config(faq: &[FaqEntryConfig], engine: &EngineConfig) -> Self {
        let entries = faq
            .iter()
            .map(|e| KnowledgeBaseEntry {
                keywords: e.keywords.clone(),
                answer: e.answer.clone(),
            })
            .collect();
        Self {
            entries,
            fallback: engine.fallback_answer.clone(),
        }
    }

    /// Returns the entries in their fixed precedence order.
    pub fn entries(&self) -> &[KnowledgeBaseEntry] {
        &self.entries
    }

    /// Returns the answer used when nothing matches.
    pub fn fallback_answer(&self) -> &str {
        &self.fallback
    }

    /// Resolves a query against the dataset.
    ///
    /// Linear scan with short-circuit: the first entry (in dataset order) with
    /// any keyword contained in the lowercased query wins. Callers are
    /// responsible for logging unmatched queries to the unanswered log.
    pub fn resolve(&self, query: &str) -> MatchOutcome {
        let normalized = query.to_lowercase();

        for (index, entry) in self.entries.iter().enumerate() {
            let matched = entry
                .keywords
                .iter()
                .any(|kw| normalized.contains(kw.as_str()));
            if matched {
                debug!(entry = index, "query matched knowledge base entry");
                return MatchOutcome {
                    answer: entry.answer.clone(),
                    matched: true,
                };
            }
        }

        debug!("query matched no knowledge base entry");
        MatchOutcome {
            answer: self.fallback.clone(),
            matched: false,
        }
    }
}
