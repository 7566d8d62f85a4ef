//! Cover rating configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::RatingConfig;

use super::defaults;

/// Cover rating section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RatingSection {
    /// Cover probe length (cells)
    #[serde(default = "defaults::probe_length")]
    pub probe_length: f32,

    /// Observer count cap
    #[serde(default = "defaults::enemy_cap")]
    pub enemy_cap: u32,

    /// Exposure magnitude where the rating bottoms out
    #[serde(default = "defaults::exposure_ceiling")]
    pub exposure_ceiling: f32,
}

impl Default for RatingSection {
    fn default() -> Self {
        Self {
            probe_length: defaults::probe_length(),
            enemy_cap: defaults::enemy_cap(),
            exposure_ceiling: defaults::exposure_ceiling(),
        }
    }
}

impl RatingSection {
    /// Convert to RatingConfig
    pub fn to_rating_config(&self) -> RatingConfig {
        RatingConfig {
            probe_length: self.probe_length,
            enemy_cap: self.enemy_cap,
            exposure_ceiling: self.exposure_ceiling,
        }
    }
}
