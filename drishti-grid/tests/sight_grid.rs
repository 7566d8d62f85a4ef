//! Integration tests for sight grid writes, decay and reads.

mod common;

use common::{grid_with_clock, pass_at, visible_cells};
use drishti_grid::{GridCoord, SetOutcome, SightReading, Vec2};

const INTERVAL: i64 = 60;

// ============================================================================
// Epoch and Window Semantics
// ============================================================================

#[test]
fn test_repeat_set_in_pass_is_idempotent() {
    let (mut grid, _clock) = grid_with_clock(10, 10, INTERVAL);
    let cell = GridCoord::new(6, 5);

    grid.next(GridCoord::new(5, 5));
    grid.set(cell);
    let once = *grid.record(cell).unwrap();

    assert_eq!(grid.set(cell), SetOutcome::Skipped);
    assert_eq!(grid.set(cell), SetOutcome::Skipped);
    assert_eq!(*grid.record(cell).unwrap(), once);
    assert_eq!(grid.value(cell), 1);
}

#[test]
fn test_live_passes_accumulate() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let cell = GridCoord::new(4, 4);

    pass_at(&mut grid, &clock, 0, GridCoord::new(0, 4), &[cell]);
    pass_at(&mut grid, &clock, 30, GridCoord::new(4, 0), &[cell]);

    let record = grid.record(cell).unwrap();
    assert_eq!(record.count(), 2);
    assert_eq!(record.direction(), Vec2::new(4.0, 0.0) + Vec2::new(0.0, 4.0));
}

#[test]
fn test_rollover_keeps_previous_window() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let cell = GridCoord::new(6, 5);
    let center = GridCoord::new(5, 5);

    // five live passes: one rollover from unset, four accumulations
    for tick in 0..5 {
        pass_at(&mut grid, &clock, tick, center, &[cell]);
    }
    assert_eq!(grid.record(cell).unwrap().count(), 5);
    assert_eq!(grid.record(cell).unwrap().expire_at(), INTERVAL);

    clock.set(INTERVAL + 1);
    grid.next(center);
    assert_eq!(grid.set(cell), SetOutcome::RolledOver);

    let record = grid.record(cell).unwrap();
    assert_eq!(record.previous_count(), 5);
    assert_eq!(record.previous_direction(), Vec2::new(5.0, 0.0));
    assert_eq!(record.count(), 1);
    assert_eq!(record.expire_at(), 2 * INTERVAL + 1);

    // readers see the larger previous window during the handoff
    assert_eq!(grid.value(cell), 5);
    assert_eq!(
        grid.sight(cell),
        SightReading {
            direction: Vec2::new(5.0, 0.0),
            enemies: 5
        }
    );
}

#[test]
fn test_full_staleness_resets() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let cell = GridCoord::new(6, 5);

    pass_at(&mut grid, &clock, 0, GridCoord::new(5, 5), &[cell]);
    pass_at(&mut grid, &clock, 1, GridCoord::new(5, 5), &[cell]);

    clock.set(2 * INTERVAL + 1);
    grid.next(GridCoord::new(5, 5));
    assert_eq!(grid.set(cell), SetOutcome::Reset);

    let record = grid.record(cell).unwrap();
    assert_eq!(record.previous_count(), 0);
    assert_eq!(record.previous_direction(), Vec2::ZERO);
    assert_eq!(record.count(), 1);
}

#[test]
fn test_concrete_scenario() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let center = GridCoord::new(5, 5);
    let cell = GridCoord::new(6, 5);

    grid.next(center);
    grid.set(cell);
    assert_eq!(grid.value(cell), 1);
    assert_eq!(grid.direction(cell), Vec2::new(1.0, 0.0));

    clock.set(10);
    grid.next(center);
    grid.set(cell);
    assert_eq!(grid.value(cell), 2);
    assert_eq!(grid.direction(cell), Vec2::new(2.0, 0.0));

    clock.set(200);
    grid.next(center);
    grid.set(cell);
    let record = grid.record(cell).unwrap();
    assert_eq!(record.previous_count(), 0);
    assert_eq!(record.count(), 1);
}

// ============================================================================
// Read Semantics
// ============================================================================

#[test]
fn test_value_expiry_boundary() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let cell = GridCoord::new(2, 2);

    pass_at(&mut grid, &clock, 0, GridCoord::new(0, 0), &[cell]);
    let expire_at = grid.record(cell).unwrap().expire_at();

    // expire_at - now == -interval: still readable
    clock.set(expire_at + INTERVAL);
    assert_eq!(grid.value(cell), 1);
    assert_ne!(grid.sight(cell), SightReading::NONE);

    // one tick later it is gone
    clock.set(expire_at + INTERVAL + 1);
    assert_eq!(grid.value(cell), 0);
    assert_eq!(grid.direction(cell), Vec2::ZERO);
    assert!(grid.sight(cell).is_unseen());
}

#[test]
fn test_direction_dominance() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let cell = GridCoord::new(5, 5);

    // previous window: 2 observations from the west
    pass_at(&mut grid, &clock, 0, GridCoord::new(0, 5), &[cell]);
    pass_at(&mut grid, &clock, 1, GridCoord::new(0, 5), &[cell]);

    // current window: 1 observation from the south
    pass_at(&mut grid, &clock, INTERVAL + 1, GridCoord::new(5, 0), &[cell]);
    assert_eq!(grid.sight(cell).enemies, 2);
    assert_eq!(grid.direction(cell), Vec2::new(10.0, 0.0));

    // second current observation ties: current wins
    pass_at(&mut grid, &clock, INTERVAL + 2, GridCoord::new(5, 0), &[cell]);
    assert_eq!(grid.sight(cell).enemies, 2);
    assert_eq!(grid.direction(cell), Vec2::new(0.0, 10.0));
}

#[test]
fn test_out_of_bounds_is_noop() {
    let (mut grid, clock) = grid_with_clock(10, 10, INTERVAL);
    let cover = drishti_grid::CoverGrid::new(10, 10);

    grid.next(GridCoord::new(5, 5));
    for cell in [
        GridCoord::new(-1, 0),
        GridCoord::new(0, -1),
        GridCoord::new(10, 0),
        GridCoord::new(0, 10),
        GridCoord::new(i32::MIN, i32::MAX),
    ] {
        assert_eq!(grid.set(cell), SetOutcome::OutOfBounds);
        assert_eq!(grid.value(cell), 0);
        assert_eq!(grid.direction(cell), Vec2::ZERO);
        assert_eq!(grid.sight(cell), SightReading::NONE);
        assert!(!grid.has_cover(cell, &cover));
        assert_eq!(grid.cover_rating(cell, &cover), 0.0);
        assert!(grid.record(cell).is_none());
    }

    clock.advance(1);
    assert_eq!(grid.stats().unset, 100);
}

#[test]
fn test_far_off_map_center() {
    let (mut grid, _clock) = grid_with_clock(10, 10, INTERVAL);
    let cover = drishti_grid::CoverGrid::new(10, 10);
    let cell = GridCoord::new(5, 5);

    grid.next(GridCoord::new(i32::MIN, 0));
    assert_eq!(grid.set(cell), SetOutcome::RolledOver);

    let direction = grid.direction(cell);
    assert_eq!(direction.x, (5i64 - i64::from(i32::MIN)) as f32);
    assert_eq!(direction.y, 5.0);
    assert!(!grid.has_cover(cell, &cover));
    assert_eq!(grid.cover_rating(cell, &cover), 0.0);

    grid.next(GridCoord::new(i32::MAX, i32::MIN));
    assert_eq!(grid.set(cell), SetOutcome::Accumulated);
    assert_eq!(grid.value(cell), 2);
}

#[test]
fn test_unset_cells_read_zero() {
    let (grid, clock) = grid_with_clock(10, 10, INTERVAL);
    for tick in [0, 1, INTERVAL, 10 * INTERVAL] {
        clock.set(tick);
        assert_eq!(grid.value(GridCoord::new(3, 3)), 0);
        assert_eq!(grid.sight(GridCoord::new(3, 3)).enemies, 0);
    }
}

// ============================================================================
// Multi-Observer Passes
// ============================================================================

#[test]
fn test_overlapping_observers_in_one_pass_count_once() {
    let (mut grid, _clock) = grid_with_clock(20, 20, INTERVAL);
    let center = GridCoord::new(10, 10);

    // two observers whose visible sets overlap around (10, 10)
    let mut cells = visible_cells(GridCoord::new(7, 10), 4);
    cells.extend(visible_cells(GridCoord::new(13, 10), 4));
    let result = grid.observe(center, cells);

    assert!(result.skipped > 0);
    assert_eq!(grid.value(GridCoord::new(10, 10)), 1);
    assert_eq!(grid.stats().peak, 1);
}

#[test]
fn test_repeated_passes_build_pressure() {
    let (mut grid, clock) = grid_with_clock(20, 20, INTERVAL);
    let center = GridCoord::new(10, 10);
    let cells = visible_cells(GridCoord::new(4, 10), 5);

    for tick in 0..6 {
        pass_at(&mut grid, &clock, tick * 5, center, &cells);
    }

    assert_eq!(grid.value(GridCoord::new(4, 10)), 6);
    let stats = grid.stats();
    assert_eq!(stats.live, cells.iter().filter(|c| c.x >= 0).count());
    assert_eq!(stats.peak, 6);
    assert_eq!(stats.total(), 400);

    clock.set(10 * INTERVAL);
    let stats = grid.stats();
    assert_eq!(stats.live, 0);
    assert_eq!(stats.expired, cells.iter().filter(|c| c.x >= 0).count());
}
