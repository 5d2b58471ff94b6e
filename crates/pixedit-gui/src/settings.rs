use std::path::Path;

use anyhow::{Context, Result};
use pixedit_core::config::EditorConfig;

/// Parse editor settings from TOML text. Missing keys keep their defaults.
pub fn parse_settings(text: &str) -> Result<EditorConfig> {
    let config: EditorConfig = toml::from_str(text).context("malformed settings file")?;
    Ok(config.sanitized())
}

pub fn read_settings(path: &Path) -> Result<EditorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("in {}", path.display()))
}
