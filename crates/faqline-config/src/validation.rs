// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates the semantic constraints the engine relies on as preconditions:
//! a non-empty ordered FAQ dataset with lowercase keywords and non-empty
//! answers, plus a usable fallback string.

use crate::diagnostic::ConfigError;
use crate::model::FaqlineConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FaqlineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    if config.engine.fallback_answer.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "engine.fallback_answer must not be empty".to_string(),
        });
    }

    if config.faq.is_empty() {
        errors.push(ConfigError::Validation {
            message: "at least one [[faq]] entry is required".to_string(),
        });
    }

    for (i, entry) in config.faq.iter().enumerate() {
        if entry.keywords.is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("faq[{i}].keywords must not be empty"),
            });
        }

        for kw in &entry.keywords {
            if kw.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("faq[{i}] contains an empty keyword"),
                });
            } else if *kw != kw.to_lowercase() {
                // The engine lowercases queries, never keywords; a mixed-case
                // keyword would silently never match.
                errors.push(ConfigError::Validation {
                    message: format!(
                        "faq[{i}] keyword `{kw}` must be lowercase"
                    ),
                });
            }
        }

        if entry.answer.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("faq[{i}].answer must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaqEntryConfig;

    #[test]
    fn default_config_validates() {
        let config = FaqlineConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_faq_list_fails_validation() {
        let mut config = FaqlineConfig::default();
        config.faq.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("at least one"))
        ));
    }

    #[test]
    fn uppercase_keyword_fails_validation() {
        let mut config = FaqlineConfig::default();
        config.faq = vec![FaqEntryConfig {
            keywords: vec!["Hello".to_string()],
            answer: "hi".to_string(),
        }];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("lowercase"))
        ));
    }

    #[test]
    fn blank_answer_fails_validation() {
        let mut config = FaqlineConfig::default();
        config.faq = vec![FaqEntryConfig {
            keywords: vec!["hello".to_string()],
            answer: "   ".to_string(),
        }];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("answer"))
        ));
    }

    #[test]
    fn entry_without_keywords_fails_validation() {
        let mut config = FaqlineConfig::default();
        config.faq = vec![FaqEntryConfig {
            keywords: vec![],
            answer: "orphaned".to_string(),
        }];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("keywords"))
        ));
    }

    #[test]
    fn all_errors_are_collected_not_just_the_first() {
        let mut config = FaqlineConfig::default();
        config.agent.name = String::new();
        config.engine.fallback_answer = String::new();
        config.faq.clear();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
