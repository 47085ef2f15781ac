use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use parlance_core::config::ParlanceConfig;

/// Load config from a TOML file.
///
/// A missing file yields the built-in defaults when `explicit` is false
/// (the user never pointed at a file, so a local LM Studio-style setup is
/// assumed); an explicitly requested path must exist.
pub fn load_config(path: &Path, explicit: bool) -> Result<ParlanceConfig> {
    if !path.exists() && !explicit {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(ParlanceConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config: {}", path.display()))?;
    let config: ParlanceConfig =
        toml::from_str(&content).with_context(|| format!("parsing config: {}", path.display()))?;
    Ok(config)
}

/// Validate config for internal consistency.
pub fn validate_config(config: &ParlanceConfig) -> Result<()> {
    let llm = &config.llm;

    if !llm.base_url.starts_with("http://") && !llm.base_url.starts_with("https://") {
        anyhow::bail!("llm.base_url '{}' must be an http(s) URL", llm.base_url);
    }
    if llm.model.trim().is_empty() {
        anyhow::bail!("llm.model must not be empty");
    }
    if !(0.0..=2.0).contains(&llm.temperature) {
        anyhow::bail!(
            "llm.temperature {} out of range (expected 0.0..=2.0)",
            llm.temperature
        );
    }
    if llm.max_tokens == 0 {
        anyhow::bail!("llm.max_tokens must be at least 1");
    }
    if llm.request_timeout_secs == 0 {
        anyhow::bail!("llm.request_timeout_secs must be at least 1");
    }

    info!("config validation passed");
    Ok(())
}
