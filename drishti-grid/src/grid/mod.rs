//! Sight grid engine.
//!
//! Aggregates, per cell, how many hostile observers saw the cell recently
//! and from which side, so threat-avoidance and cover-seeking logic can
//! ask cheap questions instead of re-tracing sight lines.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Observer pass (host side)                  │
//! │   next(center) ──► set(cell) × visible cells of observers   │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                ▼
//!                    ┌───────────────────────┐
//!                    │      SightGrid        │
//!                    │  Vec<SightRecord>     │
//!                    │  signature · center   │
//!                    └───────────┬───────────┘
//!          ┌─────────────────────┼──────────────────────┐
//!          ▼                     ▼                      ▼
//!   value / sight         has_cover ──► LineTracer   cover_rating
//!   (O(1) reads)                  └──► CoverMap      (lookup tables)
//! ```
//!
//! ## Key Components
//!
//! - [`SightGrid`]: Record array, pass signature and all operations
//! - [`SightRecord`]: Two-window aggregate of one cell
//! - [`SightGridConfig`], [`RatingConfig`]: Runtime configuration
//! - [`CellIndexer`], [`LineTracer`], [`CoverMap`]: Host collaborators
//! - [`GridIndexer`], [`BresenhamTracer`], [`CoverGrid`]: Default collaborators
//!
//! ## Example
//!
//! ```rust
//! use drishti_grid::core::{FactionId, GameClock, GridCoord};
//! use drishti_grid::grid::{CoverGrid, SightGrid, SightGridConfig};
//!
//! let clock = GameClock::new();
//! let mut grid = SightGrid::new(SightGridConfig::for_map(10, 10), FactionId(7), clock.clone());
//! let cover = CoverGrid::new(10, 10);
//!
//! grid.next(GridCoord::new(5, 5));
//! grid.set(GridCoord::new(6, 5));
//!
//! assert_eq!(grid.value(GridCoord::new(6, 5)), 1);
//! assert!(grid.cover_rating(GridCoord::new(6, 5), &cover) > 0.0);
//! ```

mod config;
pub mod cover_map;
pub mod indexer;
pub mod raycaster;
pub mod rating;
mod record;
mod sight;
pub mod traits;
mod types;

pub use config::{ConfigError, MAX_PROBE_LENGTH, RatingConfig, SightGridConfig};
pub use cover_map::CoverGrid;
pub use indexer::GridIndexer;
pub use raycaster::{BresenhamLine, BresenhamTracer};
pub use rating::exposure_rating;
pub use record::{SightRecord, UNSET_SIGNATURE};
pub use sight::SightGrid;
pub use traits::{CellIndexer, CoverMap, LineTracer};
pub use types::{ObserveResult, SetOutcome, SightReading, SightStats};
