//! Cover rating from an aggregated sight reading.
//!
//! The rating approximates
//!
//! ```text
//! log2((ceiling - min(ceiling, |dir| / (0.5 * enemies))) * min(enemies, cap) / 2)
//! ```
//!
//! with both the square root and the logarithm read from
//! [`lookup`](crate::lookup) tables. It falls as the summed direction
//! grows relative to the observer count, rises with the (capped) observer
//! count, and never drops below zero.

use crate::core::Vec2;
use crate::lookup::{self, LOG2_SCALE, SQRT_SCALE};

use super::config::RatingConfig;

/// Rating of a cell before the cover adjustment.
///
/// Returns 0 for unseen cells and for exposures past the end of the
/// square-root table.
pub fn exposure_rating(direction: Vec2, enemies: u32, config: &RatingConfig) -> f32 {
    if enemies == 0 {
        return 0.0;
    }

    let tables = lookup::tables();
    let enemies = enemies as f32;
    let normalized = direction.length_squared() / (0.25 * enemies * enemies) * SQRT_SCALE;
    let Some(spread) = tables.sqrt_half(normalized as usize) else {
        return 0.0;
    };

    let exposure = (config.exposure_ceiling - spread) * enemies.min(config.enemy_cap as f32) / 2.0;
    if exposure <= 0.0 {
        return 0.0;
    }
    tables.log2_tenth((exposure * LOG2_SCALE) as usize).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> RatingConfig {
        RatingConfig::default()
    }

    #[test]
    fn test_unseen_is_zero() {
        assert_eq!(exposure_rating(Vec2::new(3.0, 4.0), 0, &config()), 0.0);
    }

    #[test]
    fn test_matches_closed_form() {
        // one observer, summed offset of length 8: |dir| / (0.5 * 1) = 16
        let rating = exposure_rating(Vec2::new(8.0, 0.0), 1, &config());
        let expected = ((64.0f32 - 16.0) * 1.0 / 2.0).log2();
        assert_relative_eq!(rating, expected, epsilon = 0.01);
    }

    #[test]
    fn test_zero_direction_is_maximal_for_count() {
        let rating = exposure_rating(Vec2::ZERO, 4, &config());
        assert_relative_eq!(rating, (64.0f32 * 4.0 / 2.0).log2(), epsilon = 0.01);
    }

    #[test]
    fn test_table_overflow_is_zero() {
        // normalized index far past the sqrt table
        assert_eq!(exposure_rating(Vec2::new(500.0, 0.0), 1, &config()), 0.0);
    }

    #[test]
    fn test_enemy_cap() {
        let capped = exposure_rating(Vec2::ZERO, 10, &config());
        let over = exposure_rating(Vec2::ZERO, 40, &config());
        assert_eq!(capped, over);
    }

    #[test]
    fn test_monotonic_in_magnitude() {
        let mut last = f32::INFINITY;
        for step in 0..400 {
            let rating = exposure_rating(Vec2::new(step as f32 * 0.25, 0.0), 3, &config());
            assert!(rating <= last, "rating rose at step {step}: {rating} > {last}");
            last = rating;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_monotonic_in_enemies() {
        let direction = Vec2::new(6.0, 2.0);
        let mut last = 0.0f32;
        for enemies in 1..=10 {
            let rating = exposure_rating(direction, enemies, &config());
            assert!(rating >= last, "rating fell at {enemies} enemies");
            last = rating;
        }
    }

    #[test]
    fn test_never_negative() {
        for magnitude in [0.0f32, 10.0, 31.0, 31.9, 32.0, 45.0] {
            assert!(exposure_rating(Vec2::new(magnitude, 0.0), 1, &config()) >= 0.0);
        }
    }
}
