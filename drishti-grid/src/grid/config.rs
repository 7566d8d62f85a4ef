//! Configuration types for the sight grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Tick;
use crate::lookup;

/// Longest accepted cover probe, in cells.
pub const MAX_PROBE_LENGTH: f32 = 1024.0;

/// Invalid sight grid configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Map has no cells
    #[error("map has zero area ({width} x {height})")]
    ZeroArea {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },

    /// Map too large to index with `i32` coordinates or to allocate
    #[error("map too large ({width} x {height})")]
    TooLarge {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },

    /// Update interval below zero
    #[error("update interval must not be negative, got {0}")]
    NegativeInterval(Tick),

    /// Rating parameter out of range
    #[error("invalid rating parameter: {0}")]
    InvalidRating(String),
}

/// Cell count of a `width x height` map.
///
/// Fails if the product overflows or a side does not fit an `i32`
/// coordinate. A zero area is not an error here.
pub(crate) fn checked_area(width: usize, height: usize) -> Result<usize, ConfigError> {
    let too_large = ConfigError::TooLarge { width, height };
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(too_large);
    }
    width.checked_mul(height).ok_or(too_large)
}

/// Bytes of a record array with `cells` entries, `None` past what a
/// `Vec` can hold.
pub(crate) fn record_bytes(cells: usize) -> Option<usize> {
    cells
        .checked_mul(std::mem::size_of::<super::SightRecord>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
}

/// Tuning constants of the cover rating.
///
/// The defaults were tuned for colony-scale maps (a few hundred cells per
/// side, a handful of hostile observers).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Length in cells of the probe cast from a cell away from the threat.
    pub probe_length: f32,

    /// Observer count above which more observers stop raising the rating.
    pub enemy_cap: u32,

    /// Normalized exposure magnitude at which the rating bottoms out.
    ///
    /// At most [`ApproxTables::sqrt_half_max`](crate::lookup::ApproxTables::sqrt_half_max)
    /// (about 64.02), so the rating reaches zero before the square-root
    /// table runs out.
    pub exposure_ceiling: f32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            probe_length: 5.0,
            enemy_cap: 10,
            exposure_ceiling: 64.0,
        }
    }
}

impl RatingConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.probe_length > 0.0 && self.probe_length <= MAX_PROBE_LENGTH) {
            return Err(ConfigError::InvalidRating(format!(
                "probe_length must be in (0, {}], got {}",
                MAX_PROBE_LENGTH, self.probe_length
            )));
        }
        if self.enemy_cap == 0 {
            return Err(ConfigError::InvalidRating(
                "enemy_cap must be at least 1".to_string(),
            ));
        }
        let max_ceiling = lookup::tables().sqrt_half_max();
        if !(self.exposure_ceiling > 0.0 && self.exposure_ceiling <= max_ceiling) {
            return Err(ConfigError::InvalidRating(format!(
                "exposure_ceiling must be in (0, {}], got {}",
                max_ceiling, self.exposure_ceiling
            )));
        }
        Ok(())
    }
}

/// Sight grid configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SightGridConfig {
    /// Map width in cells
    pub width: usize,

    /// Map height in cells
    pub height: usize,

    /// Ticks a cell's accumulation stays valid after it was (re)started.
    /// Also the length of the grace window after expiry.
    pub update_interval: Tick,

    /// Cover rating tuning
    #[serde(default)]
    pub rating: RatingConfig,
}

impl Default for SightGridConfig {
    fn default() -> Self {
        Self {
            width: 250,
            height: 250,
            update_interval: 60,
            rating: RatingConfig::default(),
        }
    }
}

impl SightGridConfig {
    /// Configuration for a map of the given size with default tuning.
    pub fn for_map(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Replace the update interval.
    pub fn with_update_interval(mut self, update_interval: Tick) -> Self {
        self.update_interval = update_interval;
        self
    }

    /// Total number of cells, `None` if the map is too large to index.
    pub fn cell_count(&self) -> Option<usize> {
        checked_area(self.width, self.height).ok()
    }

    /// Calculate memory usage in bytes of the record array.
    pub fn memory_bytes(&self) -> Option<usize> {
        self.cell_count().and_then(record_bytes)
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = checked_area(self.width, self.height)?;
        if cells == 0 {
            return Err(ConfigError::ZeroArea {
                width: self.width,
                height: self.height,
            });
        }
        if record_bytes(cells).is_none() {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.update_interval < 0 {
            return Err(ConfigError::NegativeInterval(self.update_interval));
        }
        self.rating.validate()
    }
}
