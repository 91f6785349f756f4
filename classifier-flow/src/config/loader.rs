use crate::config::types::ClassifierConfig;
use crate::error::{ClassifierError, Result};
use std::path::Path;

/// File name looked up when no explicit configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "classifier.toml";

impl ClassifierConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| ClassifierError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ClassifierConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration and validate it
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ClassifierError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        let config: ClassifierConfig = toml::from_str(&content).map_err(|e| {
            ClassifierError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// Load and validate the file at `path`, or fall back to built-in defaults when there is none
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.as_ref().display(), "loading configuration");
            ClassifierConfig::load_with_validation(path)
        }
        None => {
            tracing::debug!("no configuration file, using defaults");
            Ok(ClassifierConfig::default())
        }
    }
}
