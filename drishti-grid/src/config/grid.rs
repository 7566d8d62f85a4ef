//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::core::{FactionId, Tick};

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Map width (cells)
    #[serde(default = "defaults::map_size")]
    pub width: usize,

    /// Map height (cells)
    #[serde(default = "defaults::map_size")]
    pub height: usize,

    /// Window lifetime and grace period (ticks)
    #[serde(default = "defaults::update_interval")]
    pub update_interval: Tick,

    /// Owning faction id
    #[serde(default = "defaults::faction")]
    pub faction: u32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: defaults::map_size(),
            height: defaults::map_size(),
            update_interval: defaults::update_interval(),
            faction: defaults::faction(),
        }
    }
}

impl GridSection {
    /// Owning faction
    pub fn faction_id(&self) -> FactionId {
        FactionId(self.faction)
    }
}
