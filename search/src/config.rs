use serde::{Deserialize, Serialize};
use sift_core::error::ConfigError;
use std::path::Path;

/// Configuration for search behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Field used to order active-query results.
    pub sort_field: String,
    /// Field holding each record's type discriminant.
    pub discriminant_field: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            discriminant_field: "type".to_string(),
        }
    }
}

impl SearchConfig {
    /// Loads config from a TOML file. Returns the default config if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
