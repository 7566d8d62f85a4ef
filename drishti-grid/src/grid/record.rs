//! Per-cell sight record and its update state machine.
//!
//! A record keeps two windows of observations: the current one, still
//! collecting, and the previous one, kept so readers see a smooth handoff
//! instead of a drop to zero when a window rolls over.
//!
//! Two independent clocks drive it:
//!
//! - the grid **signature**, bumped once per writer pass, so a cell seen
//!   by several observers in one pass is counted once;
//! - the simulation **tick**, compared against `expire_at` to decide
//!   whether a new observation extends, rolls over or restarts the record.
//!
//! ```text
//!                   remaining = expire_at - now
//!
//!   remaining > 0            ─► Accumulated  (count += 1)
//!   -interval <= remaining   ─► RolledOver   (current → previous, count = 1)
//!   remaining < -interval    ─► Reset        (previous cleared, count = 1)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Tick, Vec2};

use super::types::SetOutcome;

/// Signature value of a record that has never been written.
pub const UNSET_SIGNATURE: i32 = -1;

/// Aggregated sight state of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SightRecord {
    last_signature: i32,
    expire_at: Tick,
    count: u16,
    previous_count: u16,
    direction: Vec2,
    previous_direction: Vec2,
}

impl Default for SightRecord {
    fn default() -> Self {
        Self::UNSET
    }
}

impl SightRecord {
    /// A record that has never been written.
    pub const UNSET: SightRecord = SightRecord {
        last_signature: UNSET_SIGNATURE,
        expire_at: 0,
        count: 0,
        previous_count: 0,
        direction: Vec2::ZERO,
        previous_direction: Vec2::ZERO,
    };

    /// Apply one observation of this cell.
    ///
    /// `offset` is the vector from the pass center to the cell.
    pub(crate) fn observe(
        &mut self,
        signature: i32,
        offset: Vec2,
        now: Tick,
        update_interval: Tick,
    ) -> SetOutcome {
        if self.last_signature == signature {
            return SetOutcome::Skipped;
        }

        let remaining = self.expire_at - now;
        let outcome = if remaining > 0 {
            self.count = self.count.saturating_add(1);
            self.direction += offset;
            SetOutcome::Accumulated
        } else if remaining >= -update_interval {
            self.expire_at = now + update_interval;
            self.previous_count = self.count;
            self.previous_direction = self.direction;
            self.count = 1;
            self.direction = offset;
            SetOutcome::RolledOver
        } else {
            self.expire_at = now + update_interval;
            self.previous_count = 0;
            self.previous_direction = Vec2::ZERO;
            self.count = 1;
            self.direction = offset;
            SetOutcome::Reset
        };

        self.last_signature = signature;
        outcome
    }

    /// True once the record is past its expiry plus one grace interval.
    #[inline]
    pub fn is_expired(&self, now: Tick, update_interval: Tick) -> bool {
        self.expire_at - now < -update_interval
    }

    /// True if the record has never been written.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.last_signature == UNSET_SIGNATURE
    }

    /// Larger of the two window counts.
    #[inline]
    pub fn value(&self) -> u16 {
        self.count.max(self.previous_count)
    }

    /// Direction and count of the window with more observations.
    /// Ties go to the current window.
    #[inline]
    pub fn dominant(&self) -> (Vec2, u16) {
        if self.count >= self.previous_count {
            (self.direction, self.count)
        } else {
            (self.previous_direction, self.previous_count)
        }
    }

    /// Signature of the pass that last wrote this record.
    pub fn last_signature(&self) -> i32 {
        self.last_signature
    }

    /// Tick at which the current window expires.
    pub fn expire_at(&self) -> Tick {
        self.expire_at
    }

    /// Observations in the current window.
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Observations in the previous window.
    pub fn previous_count(&self) -> u16 {
        self.previous_count
    }

    /// Summed direction of the current window.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Summed direction of the previous window.
    pub fn previous_direction(&self) -> Vec2 {
        self.previous_direction
    }
}
