//! Test utilities for DrishtiGrid.
//!
//! Helpers for building grids, observer visibility sets and cover layouts.

#![allow(dead_code)]

use drishti_grid::{
    CoverGrid, CoverThing, FactionId, GameClock, GridCoord, SightGrid, SightGridConfig, Tick, Vec2,
};

/// Create a grid and a clock handle driving it.
pub fn grid_with_clock(width: usize, height: usize, update_interval: Tick) -> (SightGrid, GameClock) {
    let clock = GameClock::new();
    let config = SightGridConfig::for_map(width, height).with_update_interval(update_interval);
    let grid = SightGrid::new(config, FactionId(1), clock.clone());
    (grid, clock)
}

/// Cells within `radius` (Euclidean) of `observer`, including the observer cell.
///
/// Stands in for a host line-of-sight pass on an open map.
pub fn visible_cells(observer: GridCoord, radius: i32) -> Vec<GridCoord> {
    let mut cells = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                cells.push(GridCoord::new(observer.x + dx, observer.y + dy));
            }
        }
    }
    cells
}

/// A horizontal run of sandbags from `x0` to `x1` on row `y`.
pub fn sandbag_row(cover: &mut CoverGrid, y: i32, x0: i32, x1: i32) {
    cover.place_line(
        GridCoord::new(x0, y),
        GridCoord::new(x1, y),
        CoverThing::partial(),
    );
}

/// Run one observer pass at the given tick.
pub fn pass_at(grid: &mut SightGrid, clock: &GameClock, tick: Tick, center: GridCoord, cells: &[GridCoord]) {
    clock.set(tick);
    grid.observe(center, cells.iter().copied());
}

/// Assert two vectors are approximately equal.
pub fn assert_vec_close(actual: Vec2, expected: Vec2, tol: f32) {
    assert!(
        (actual.x - expected.x).abs() < tol && (actual.y - expected.y).abs() < tol,
        "vector {:?} differs from {:?} by more than {}",
        actual,
        expected,
        tol
    );
}
