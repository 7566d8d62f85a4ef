//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::SightGridConfig;

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::rating::RatingSection;

/// Full DrishtiGrid configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Cover rating settings
    #[serde(default)]
    pub rating: RatingSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::debug!("Loaded sight grid config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.to_sight_config().validate()?;
        Ok(config)
    }

    /// Convert to SightGridConfig for SightGrid
    pub fn to_sight_config(&self) -> SightGridConfig {
        SightGridConfig {
            width: self.grid.width,
            height: self.grid.height,
            update_interval: self.grid.update_interval,
            rating: self.rating.to_rating_config(),
        }
    }
}
