// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! Settings are read from a YAML file. Every field has a default, so an
//! empty file (or no file at all) gives the stock behaviour.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Values filled into a freshly added prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    pub prompt_text: String,
    pub image_size: String,
    pub aspect_ratio: String,
    pub approval_status: i64,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            prompt_text: "New prompt description...".to_string(),
            image_size: "1024x1024".to_string(),
            aspect_ratio: "1:1".to_string(),
            approval_status: 1,
        }
    }
}

/// Top-level editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Directory that JSON/CSV downloads are written to.
    pub export_dir: PathBuf,
    /// Prefix for attached image paths.
    pub upload_dir: String,
    /// How long a status message stays visible.
    pub message_ttl_secs: u64,
    pub new_prompt: PromptDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            upload_dir: "uploads".to_string(),
            message_ttl_secs: 3,
            new_prompt: PromptDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Reading config {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Parsing config {}", path.display()))
    }

    /// Parse settings from YAML text. Blank text yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_yaml_gives_defaults() {
        let config = EditorConfig::from_yaml("  \n").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.message_ttl(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "export_dir: out\nnew_prompt:\n  image_size: 1792x1024\n";
        let config = EditorConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(config.upload_dir, "uploads");
        assert_eq!(config.new_prompt.image_size, "1792x1024");
        assert_eq!(config.new_prompt.aspect_ratio, "1:1");
        assert_eq!(config.new_prompt.approval_status, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shotlist.yaml");
        std::fs::write(&path, "message_ttl_secs: 10\nupload_dir: assets\n").unwrap();

        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config.message_ttl_secs, 10);
        assert_eq!(config.upload_dir, "assets");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EditorConfig::load(&dir.path().join("nope.yaml")).is_err());
    }
}
