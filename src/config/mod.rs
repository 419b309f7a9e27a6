pub mod genetic;

pub use genetic::GeneticConfig;

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration, loaded from a TOML file or built from defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub genetic: GeneticConfig,
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DraftError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| DraftError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.genetic.validate()?;
        Ok(())
    }
}
