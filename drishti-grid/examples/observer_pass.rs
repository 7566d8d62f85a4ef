//! Observer pass walkthrough.
//!
//! Runs a few observer passes against a small map with a sandbag line and
//! prints the cover rating along a column.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example observer_pass -- configs/config.yaml
//! ```

use std::path::Path;

use drishti_grid::{CoverGrid, CoverThing, DrishtiConfig, GameClock, GridCoord, SightGrid};

fn visible_disc(observer: GridCoord, radius: i32) -> Vec<GridCoord> {
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => DrishtiConfig::load(Path::new(&path))?,
        None => DrishtiConfig::default(),
    };

    let mut sight_config = config.to_sight_config();
    sight_config.width = 40;
    sight_config.height = 40;

    let clock = GameClock::new();
    let mut grid = SightGrid::try_new(sight_config, config.grid.faction_id(), clock.clone())?;

    let mut cover = CoverGrid::new(40, 40);
    cover.place_line(GridCoord::new(10, 20), GridCoord::new(30, 20), CoverThing::partial());

    let observers = [GridCoord::new(14, 4), GridCoord::new(20, 2), GridCoord::new(26, 4)];
    for pass in 0..4 {
        clock.advance(15);
        for observer in observers {
            let result = grid.observe(observer, visible_disc(observer, 28));
            log::info!(
                "pass {} from ({}, {}): {} updated, {} off map",
                pass,
                observer.x,
                observer.y,
                result.cells_updated(),
                result.out_of_bounds
            );
        }
    }

    let stats = grid.stats();
    log::info!(
        "{} live, {} unset, peak pressure {}",
        stats.live,
        stats.unset,
        stats.peak
    );

    for y in (10..36).step_by(2) {
        let cell = GridCoord::new(20, y);
        println!(
            "({:>2}, {:>2})  enemies {:>2}  cover {:<5}  rating {:.3}",
            cell.x,
            cell.y,
            grid.sight(cell).enemies,
            grid.has_cover(cell, &cover),
            grid.cover_rating(cell, &cover)
        );
    }

    Ok(())
}
