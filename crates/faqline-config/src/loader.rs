// SPDX-FileCopyrightText: 2026 Faqline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./faqline.toml` > `~/.config/faqline/faqline.toml`
//! > `/etc/faqline/faqline.toml` with environment variable overrides via the
//! `FAQLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FaqlineConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults (including the builtin FAQ dataset)
/// 2. `/etc/faqline/faqline.toml` (system-wide)
/// 3. `~/.config/faqline/faqline.toml` (user XDG config)
/// 4. `./faqline.toml` (local directory)
/// 5. `FAQLINE_*` environment variables
pub fn load_config() -> Result<FaqlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaqlineConfig::default()))
        .merge(Toml::file("/etc/faqline/faqline.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("faqline/faqline.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("faqline.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<FaqlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaqlineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FaqlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FaqlineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `FAQLINE_ENGINE_RESPONSE_DELAY_MS` must
/// map to `engine.response_delay_ms`, not `engine.response.delay.ms`.
fn env_provider() -> Env {
    Env::prefixed("FAQLINE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: FAQLINE_ENGINE_FALLBACK_ANSWER -> "engine_fallback_answer"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("engine_", "engine.", 1);
        mapped.into()
    })
}
