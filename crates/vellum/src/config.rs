//! Configuration file loading for vellum.
//!
//! Reads `vellum.config.json` from the current working directory, or the
//! file given with `--config`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vellum_maestro::CollectorOptions;

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "vellum.config.json";

/// Top-level vellum configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VellumConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Definition collection options.
    #[serde(default)]
    pub definition: CollectorOptions,
}

/// Load the configuration.
///
/// Without an explicit path, a missing or broken `vellum.config.json` in the
/// current directory falls back to defaults with a warning. An explicit path
/// must exist and parse.
pub fn load_config(explicit: Option<&Path>) -> Result<VellumConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let config_path = std::env::current_dir()
        .unwrap_or_default()
        .join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return Ok(VellumConfig::default());
    }

    match read_config(&config_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("\x1b[33mWarning:\x1b[0m {}", e);
            Ok(VellumConfig::default())
        }
    }
}

fn read_config(path: &Path) -> Result<VellumConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| CliError::Config {
        path: PathBuf::from(path),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn parse_config(content: &str) -> std::result::Result<VellumConfig, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.definition, CollectorOptions::default());
    }

    #[test]
    fn test_partial_definition_section() {
        let config = parse_config(
            r#"{
  "$schema": "./node_modules/.vellum/schema.json",
  "definition": { "extensions": [".vue"], "style": false, "rawTextTags": ["script", "style", "textarea"] }
}"#,
        )
        .unwrap();

        assert_eq!(config.definition.extensions, vec![".vue"]);
        assert!(!config.definition.style);
        assert!(config.definition.template);
        assert_eq!(config.definition.raw_text_tags.len(), 3);
        assert!(config.schema.is_some());
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config(r#"{ "definition": { "template": "yes" } }"#).is_err());
    }
}
