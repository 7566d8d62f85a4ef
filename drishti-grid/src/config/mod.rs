//! Configuration loading for DrishtiGrid.
//!
//! Loads grid and rating settings from a single YAML file with sensible
//! defaults for every field.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_grid::config::DrishtiConfig;
//! use drishti_grid::core::GameClock;
//! use drishti_grid::SightGrid;
//!
//! // Load from default path (configs/config.yaml), or defaults if absent
//! let config = DrishtiConfig::load_default()?;
//!
//! let grid = SightGrid::try_new(
//!     config.to_sight_config(),
//!     config.grid.faction_id(),
//!     GameClock::new(),
//! )?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Map size, update interval, owning faction |
//! | [`RatingSection`] | Cover probe length and rating tuning |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   width: 250
//!   height: 250
//!   update_interval: 60   # ticks
//!   faction: 1
//!
//! rating:
//!   probe_length: 5.0     # cells
//!   enemy_cap: 10
//!   exposure_ceiling: 64.0
//! ```

mod defaults;
mod drishti;
mod error;
mod grid;
mod rating;

pub use drishti::DrishtiConfig;
pub use error::ConfigLoadError;

pub use grid::GridSection;
pub use rating::RatingSection;
