use crate::error::{Error, Result};
use crate::parser::Layout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Callee name recognized as an import primitive
    pub import_function: String,
    /// Replaces the directory prefix in `dir + "path"` imports
    pub relative_prefix: String,
    /// Appended to splat parameter names
    pub variadic_marker: String,
    /// Module convention used to enumerate classes and functions
    pub layout: Layout,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            import_function: "require".to_string(),
            relative_prefix: ".".to_string(),
            variadic_marker: "...".to_string(),
            layout: Layout::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "using default config");
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.extract.import_function.trim().is_empty() {
            return Err(Error::config_validation("import_function must not be empty"));
        }

        if self.extract.variadic_marker.is_empty() {
            return Err(Error::config_validation("variadic_marker must not be empty"));
        }

        Ok(())
    }
}
