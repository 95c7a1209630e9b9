//! Extractor configuration, loadable from YAML

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Prefix added to a negated verb
    pub negation_marker: String,
    /// Subject assumed for a root verb with no subject; `None` disables it
    pub default_subject: Option<String>,
    /// Also collect objects coordinated by "and"
    pub expand_object_conjunctions: bool,
    /// Take objects from an `xcomp` verb and report that verb instead
    pub follow_xcomp: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            negation_marker: "!".to_string(),
            default_subject: Some("i".to_string()),
            expand_object_conjunctions: false,
            follow_xcomp: false,
        }
    }
}

impl ExtractorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| anyhow!("Invalid extractor config: {}", e))
    }

    /// Load from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(anyhow!("Extractor config not found: {}", path.display()));
        }

        let yaml_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read extractor config {}: {}", path.display(), e))?;

        let config: Self = serde_yaml::from_str(&yaml_str)
            .map_err(|e| anyhow!("Invalid YAML in {}: {}", path.display(), e))?;

        log::info!("Loaded extractor config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
