//! Result and statistics types of the sight grid.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Which branch a write took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetOutcome {
    /// Cell already written in this pass
    Skipped,
    /// Current window still live; observation added to it
    Accumulated,
    /// Current window expired within grace; demoted to previous
    RolledOver,
    /// Record too old to blend; both windows restarted
    Reset,
    /// Cell is off the map
    OutOfBounds,
}

/// Tally of one writer pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserveResult {
    /// Writes into a live window
    pub accumulated: usize,
    /// Writes that rolled a window over
    pub rolled_over: usize,
    /// Writes that restarted a stale record
    pub reset: usize,
    /// Repeat writes in the same pass
    pub skipped: usize,
    /// Writes off the map
    pub out_of_bounds: usize,
}

impl ObserveResult {
    /// Count one outcome.
    pub fn record(&mut self, outcome: SetOutcome) {
        match outcome {
            SetOutcome::Accumulated => self.accumulated += 1,
            SetOutcome::RolledOver => self.rolled_over += 1,
            SetOutcome::Reset => self.reset += 1,
            SetOutcome::Skipped => self.skipped += 1,
            SetOutcome::OutOfBounds => self.out_of_bounds += 1,
        }
    }

    /// Writes that changed a record.
    pub fn cells_updated(&self) -> usize {
        self.accumulated + self.rolled_over + self.reset
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: &ObserveResult) {
        self.accumulated += other.accumulated;
        self.rolled_over += other.rolled_over;
        self.reset += other.reset;
        self.skipped += other.skipped;
        self.out_of_bounds += other.out_of_bounds;
    }
}

/// Dominant sight direction of a cell together with its observer count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SightReading {
    /// Summed offset from pass centers to the cell
    pub direction: Vec2,
    /// Observations behind `direction`
    pub enemies: u32,
}

impl SightReading {
    /// Reading of a cell nobody sees.
    pub const NONE: SightReading = SightReading {
        direction: Vec2::ZERO,
        enemies: 0,
    };

    /// True if no observer contributes.
    pub fn is_unseen(&self) -> bool {
        self.enemies == 0
    }
}

/// Record counts by state across the whole grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightStats {
    /// Written records still readable
    pub live: usize,
    /// Written records past the grace window
    pub expired: usize,
    /// Records never written
    pub unset: usize,
    /// Highest value among live records
    pub peak: u32,
}

impl SightStats {
    /// Total records.
    pub fn total(&self) -> usize {
        self.live + self.expired + self.unset
    }
}
