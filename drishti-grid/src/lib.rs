//! # DrishtiGrid
//!
//! Per-faction sight pressure grid with epoch decay and fast cover rating.
//!
//! ## Overview
//!
//! For one map and one faction, DrishtiGrid keeps a continuously updated
//! estimate of how much hostile observation each cell is under and from
//! which direction it comes. Higher-level logic (cover seeking,
//! suppression, threat avoidance) reads it every tick instead of
//! recomputing sight lines.
//!
//! - **Streaming writes**: observers report visible cells one at a time;
//!   each write touches exactly one record
//! - **Two-window decay**: each record keeps a current and a previous
//!   window so values hand off smoothly instead of dropping to zero
//! - **Pass signature**: a cell seen by several observers in one pass
//!   counts once, checked with a single integer compare
//! - **Table-driven rating**: the cover rating reads square roots and
//!   logarithms from process-wide lookup tables
//!
//! ## Quick Start
//!
//! ```rust
//! use drishti_grid::{FactionId, GameClock, GridCoord, SightGrid, SightGridConfig};
//!
//! let clock = GameClock::new();
//! let config = SightGridConfig::for_map(10, 10).with_update_interval(60);
//! let mut grid = SightGrid::new(config, FactionId(1), clock.clone());
//!
//! // Tick 0: one observer pass centered on (5, 5)
//! grid.next(GridCoord::new(5, 5));
//! grid.set(GridCoord::new(6, 5));
//! assert_eq!(grid.value(GridCoord::new(6, 5)), 1);
//!
//! // Tick 10: the window is still live, so the pass accumulates
//! clock.set(10);
//! grid.next(GridCoord::new(5, 5));
//! grid.set(GridCoord::new(6, 5));
//! assert_eq!(grid.value(GridCoord::new(6, 5)), 2);
//! ```
//!
//! ## Coordinate System
//!
//! Cells are addressed by [`GridCoord`] (column `x`, row `y`) or by the
//! dense index the [`CellIndexer`] assigns. Directions are [`Vec2`]
//! offsets in cell units, pointing from the pass center to the cell.
//!
//! ## Threading
//!
//! A grid is written and read on one thread. The lookup tables in
//! [`lookup`] are shared and immutable.

#![warn(missing_docs)]

// Core types
pub mod core;

// Sight grid engine
pub mod grid;

// Approximation tables
pub mod lookup;

// File configuration
pub mod config;

// Re-export commonly used types
pub use crate::core::{
    CoverThing, FactionId, Fillage, GameClock, GridCoord, ThingCategory, Tick, TickSource, Vec2,
};

pub use grid::{
    BresenhamTracer, CellIndexer, ConfigError, CoverGrid, CoverMap, GridIndexer, LineTracer,
    ObserveResult, RatingConfig, SetOutcome, SightGrid, SightGridConfig, SightReading,
    SightRecord, SightStats, exposure_rating,
};

pub use config::{ConfigLoadError, DrishtiConfig};
