use crate::utils::error::{MiddlewareError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    pub legacy: LegacyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyConfig {
    /// Base address of the legacy WebAlgo host; operation paths are appended.
    pub base_url: String,
}

impl MiddlewareConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: MiddlewareConfig =
            toml::from_str(&content).map_err(|e| MiddlewareError::ConfigError {
                message: format!("failed to parse config file: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("LEGACY_BASE_URL").map_err(|_| MiddlewareError::ConfigError {
                message: "LEGACY_BASE_URL is not set".to_string(),
            })?;
        let config = MiddlewareConfig {
            legacy: LegacyConfig { base_url },
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for MiddlewareConfig {
    fn validate(&self) -> Result<()> {
        validate_url("legacy.base_url", &self.legacy.base_url)
    }
}
