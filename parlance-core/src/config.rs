//! TOML configuration schema.
//!
//! Every field carries a default so an absent config file means "talk to a
//! local LM Studio-style endpoint with stock generation parameters".
//! Loading and validation live in the binary; this module is schema only.

use serde::{Deserialize, Serialize};

/// Top-level parlance configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParlanceConfig {
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Connection and generation settings for the completions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Base URL of the inference server; the completions path is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound on one completion request; expiry surfaces as a timeout
    /// error rather than blocking the turn indefinitely.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:1234/v1".into()
}

fn default_model() -> String {
    "llama".into()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    256
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ParlanceConfig = toml::from_str("").expect("parse");
        assert_eq!(config.llm.base_url, "http://localhost:1234/v1");
        assert_eq!(config.llm.model, "llama");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_tokens, 256);
        assert_eq!(config.llm.request_timeout_secs, 30);
    }

    #[test]
    fn partial_llm_section_keeps_other_defaults() {
        let config: ParlanceConfig = toml::from_str(
            r#"
            [llm]
            model = "mistral"
            max_tokens = 512
            "#,
        )
        .expect("parse");
        assert_eq!(config.llm.model, "mistral");
        assert_eq!(config.llm.max_tokens, 512);
        assert_eq!(config.llm.temperature, 0.7);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ParlanceConfig, _> = toml::from_str(
            r#"
            [llm]
            modle = "typo"
            "#,
        );
        assert!(result.is_err());
    }
}
