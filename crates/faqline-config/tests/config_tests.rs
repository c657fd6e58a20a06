// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Faqline configuration system.

use faqline_config::diagnostic::ConfigError;
use faqline_config::model::FaqlineConfig;
use faqline_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_faqline_config() {
    let toml = r#"
[agent]
name = "helpdesk"
log_level = "debug"

[engine]
response_delay_ms = 250
fallback_answer = "No idea, sorry."

[[faq]]
keywords = ["hours", "open"]
answer = "We are open 9-5."

[[faq]]
keywords = ["parking"]
answer = "Free parking behind the building."
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "helpdesk");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.engine.response_delay_ms, 250);
    assert_eq!(config.engine.fallback_answer, "No idea, sorry.");
    assert_eq!(config.faq.len(), 2);
    assert_eq!(config.faq[0].keywords, vec!["hours", "open"]);
    assert_eq!(config.faq[1].answer, "Free parking behind the building.");
}

/// Unknown field in [agent] section produces an UnknownField error.
#[test]
fn unknown_field_in_agent_produces_error() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown field inside a [[faq]] entry produces an UnknownField error.
#[test]
fn unknown_field_in_faq_entry_produces_error() {
    let toml = r#"
[[faq]]
keywords = ["hello"]
anser = "typo"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("anser"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "faqline");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.engine.response_delay_ms, 500);
    assert!(config.engine.fallback_answer.starts_with("I'm sorry"));
    assert_eq!(config.faq.len(), 10);
}

/// A merged override wins over TOML, as FAQLINE_* env vars do at runtime.
#[test]
fn merged_override_wins_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[engine]
response_delay_ms = 500
"#;

    // Simulate FAQLINE_ENGINE_RESPONSE_DELAY_MS by merging the dotted key
    // the env provider maps to.
    let config: FaqlineConfig = Figment::new()
        .merge(Serialized::defaults(FaqlineConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("engine.response_delay_ms", 0u64))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.engine.response_delay_ms, 0);
}

/// load_and_validate_str surfaces validation failures as diagnostics.
#[test]
fn validation_failures_surface_as_config_errors() {
    let toml = r#"
[[faq]]
keywords = []
answer = "unreachable"
"#;

    let errors = load_and_validate_str(toml).expect_err("empty keywords must fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("keywords"))
    ));
}

/// A fully valid configuration passes load_and_validate_str end to end.
#[test]
fn valid_config_passes_load_and_validate() {
    let toml = r#"
[engine]
response_delay_ms = 0

[[faq]]
keywords = ["ping"]
answer = "pong"
"#;

    let config = load_and_validate_str(toml).expect("config should validate");
    assert_eq!(config.faq.len(), 1);
}
