// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory log of queries the knowledge base could not answer.
//!
//! Every unmatched query is recorded verbatim, duplicates included; the log
//! is the raw material for curating new FAQ entries, so collapsing repeats
//! would hide how often a gap is actually hit.

use tracing::debug;

/// Append-only list of unanswered queries, in submission order.
#[derive(Debug, Default)]
pub struct UnansweredLog {
    queries: Vec<String>,
}

impl UnansweredLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a query that produced the fallback answer.
    pub fn record(&mut self, query: &str) {
        debug!(query, "unanswered query recorded");
        self.queries.push(query.to_string());
    }

    /// All recorded queries, oldest first.
    pub fn all(&self) -> &[String] {
        &self.queries
    }
}
