//! Precomputed square-root and log2 tables for the cover rating.
//!
//! The rating query runs for thousands of cells per tick, so the two
//! transcendental functions it needs are replaced by table reads on a
//! discretized argument:
//!
//! ```text
//! sqrt_half[i] = sqrt(i / 2)      i in [0, SQRT_TABLE_LEN)
//! log2_tenth[i] = log2(i / 10)    i in [1, LOG2_TABLE_LEN), [0] = 0
//! ```
//!
//! The tables are process-wide, built on first use and never mutated, so
//! any number of grids on any number of threads may share them.

use std::sync::LazyLock;

/// Entries in the square-root table.
pub const SQRT_TABLE_LEN: usize = 8198;

/// Entries in the log2 table.
pub const LOG2_TABLE_LEN: usize = 3420;

/// Argument scale of the square-root table (`index = value * SQRT_SCALE`).
pub const SQRT_SCALE: f32 = 2.0;

/// Argument scale of the log2 table (`index = value * LOG2_SCALE`).
pub const LOG2_SCALE: f32 = 10.0;

static TABLES: LazyLock<ApproxTables> = LazyLock::new(ApproxTables::build);

/// The two lookup tables.
pub struct ApproxTables {
    sqrt_half: Box<[f32]>,
    log2_tenth: Box<[f32]>,
}

impl ApproxTables {
    fn build() -> Self {
        let mut sqrt_half = vec![0.0f32; SQRT_TABLE_LEN];
        for (i, slot) in sqrt_half.iter_mut().enumerate().skip(1) {
            *slot = (i as f32 / SQRT_SCALE).sqrt();
        }

        // log2(0) is undefined; index 0 stays at the additive identity
        let mut log2_tenth = vec![0.0f32; LOG2_TABLE_LEN];
        for (i, slot) in log2_tenth.iter_mut().enumerate().skip(1) {
            *slot = (i as f32 / LOG2_SCALE).log2();
        }

        log::debug!(
            "Built approximation tables: sqrt={} entries, log2={} entries",
            SQRT_TABLE_LEN,
            LOG2_TABLE_LEN
        );

        Self {
            sqrt_half: sqrt_half.into_boxed_slice(),
            log2_tenth: log2_tenth.into_boxed_slice(),
        }
    }

    /// `sqrt(index / 2)`, or `None` past the end of the table.
    #[inline]
    pub fn sqrt_half(&self, index: usize) -> Option<f32> {
        self.sqrt_half.get(index).copied()
    }

    /// Largest value the square-root table can return.
    #[inline]
    pub fn sqrt_half_max(&self) -> f32 {
        self.sqrt_half[SQRT_TABLE_LEN - 1]
    }

    /// `log2(index / 10)`, clamped to the last entry past the end.
    #[inline]
    pub fn log2_tenth(&self, index: usize) -> f32 {
        let last = self.log2_tenth.len() - 1;
        self.log2_tenth[index.min(last)]
    }
}

/// Shared tables, built on first access.
#[inline]
pub fn tables() -> &'static ApproxTables {
    &TABLES
}

/// Force table construction ahead of the first query.
///
/// Optional; the first rating call builds them otherwise.
pub fn warm_up() {
    LazyLock::force(&TABLES);
}
