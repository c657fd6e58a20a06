// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Faqline FAQ engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Faqline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values; the
/// compiled default FAQ dataset ships with the binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FaqlineConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Engine behavior settings (reply delay, fallback answer).
    #[serde(default)]
    pub engine: EngineConfig,

    /// Ordered FAQ entries. Order is significant: earlier entries win when
    /// several keyword sets match the same query.
    #[serde(default = "default_faq_entries")]
    pub faq: Vec<FaqEntryConfig>,
}

impl Default for FaqlineConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig::default(),
            engine: EngineConfig::default(),
            faq: default_faq_entries(),
        }
    }
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "faqline".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Engine behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Delay in milliseconds between a user submission and the bot reply.
    /// Uniform for every submission, so replies stay in submission order.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Answer returned when no FAQ entry matches a query.
    #[serde(default = "default_fallback_answer")]
    pub fallback_answer: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            fallback_answer: default_fallback_answer(),
        }
    }
}

fn default_response_delay_ms() -> u64 {
    500
}

fn default_fallback_answer() -> String {
    "I'm sorry, I couldn't find an answer to that question. Could you please \
     rephrase it or try a different query?"
        .to_string()
}

/// One FAQ entry: a keyword set and the canonical answer it maps to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntryConfig {
    /// Lowercase keywords. A query matches this entry when any keyword is a
    /// substring of the lowercased query.
    pub keywords: Vec<String>,

    /// The canonical answer for this entry.
    pub answer: String,
}

/// The compiled-in FAQ dataset, used when no `[[faq]]` entries are configured.
pub fn default_faq_entries() -> Vec<FaqEntryConfig> {
    let entries: &[(&[&str], &str)] = &[
        (
            &["hello", "hi", "hey", "greetings"],
            "Hello! How can I assist you today regarding our services?",
        ),
        (
            &["services", "offer", "what do you do", "provide"],
            "We offer a wide range of services including product support, technical \
             assistance, and general information about our company.",
        ),
        (
            &["contact", "support", "reach out", "phone", "email"],
            "You can contact our support team via email at support@example.com or call \
             us at 1-800-123-4567 during business hours.",
        ),
        (
            &["pricing", "cost", "how much", "price"],
            "Our pricing varies depending on the service. Please visit our 'Pricing' \
             page on the website or contact sales for a detailed quote.",
        ),
        (
            &["account", "login", "password", "reset"],
            "For account-related issues, please visit our 'Account Management' section \
             or use the 'Forgot Password' link on the login page.",
        ),
        (
            &["shipping", "delivery", "order status"],
            "You can track your order status by logging into your account or by \
             entering your order number on our 'Order Tracking' page.",
        ),
        (
            &["return", "refund", "exchange"],
            "Please refer to our 'Return Policy' page for detailed information on \
             returns, refunds, and exchanges. Most items can be returned within 30 days.",
        ),
        (
            &["features", "product capabilities", "what can it do"],
            "Our product boasts features like real-time analytics, customizable \
             dashboards, and seamless integration with popular tools. Visit our \
             product page for more details!",
        ),
        (
            &["security", "data protection", "safe"],
            "We prioritize your data security with industry-standard encryption, \
             regular audits, and strict privacy policies. Your information is safe \
             with us.",
        ),
        (
            &["payment methods", "credit card", "paypal"],
            "We accept various payment methods including major credit cards (Visa, \
             MasterCard, Amex), PayPal, and bank transfers.",
        ),
    ];

    entries
        .iter()
        .map(|(keywords, answer)| FaqEntryConfig {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            answer: answer.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_builtin_dataset() {
        let config = FaqlineConfig::default();
        assert_eq!(config.faq.len(), 10);
        assert!(config.faq[0].keywords.contains(&"hello".to_string()));
        assert_eq!(config.engine.response_delay_ms, 500);
    }

    #[test]
    fn default_keywords_are_all_lowercase() {
        for entry in default_faq_entries() {
            for kw in &entry.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword `{kw}` is not lowercase");
            }
        }
    }

    #[test]
    fn greeting_entry_comes_first() {
        // Entry order decides precedence for ambiguous queries, so the
        // dataset must keep the greeting entry ahead of pricing.
        let entries = default_faq_entries();
        let hello = entries
            .iter()
            .position(|e| e.keywords.contains(&"hello".to_string()))
            .unwrap();
        let pricing = entries
            .iter()
            .position(|e| e.keywords.contains(&"pricing".to_string()))
            .unwrap();
        assert!(hello < pricing);
    }
}
