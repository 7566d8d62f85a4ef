//! Simulation tick source.

use std::cell::Cell;
use std::rc::Rc;

/// Simulation tick count. Signed so expiry arithmetic can go negative.
pub type Tick = i64;

/// A monotonically increasing "current tick" source.
pub trait TickSource {
    /// The current simulation tick.
    fn now(&self) -> Tick;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    #[inline]
    fn now(&self) -> Tick {
        (**self).now()
    }
}

/// Manually driven game clock.
///
/// Cloning yields another handle to the same counter, so the orchestrator
/// can keep one handle and hand another to each grid.
#[derive(Clone, Debug, Default)]
pub struct GameClock {
    ticks: Rc<Cell<Tick>>,
}

impl GameClock {
    /// Create a clock starting at tick 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at the given tick
    pub fn starting_at(tick: Tick) -> Self {
        Self {
            ticks: Rc::new(Cell::new(tick)),
        }
    }

    /// Jump to an absolute tick.
    pub fn set(&self, tick: Tick) {
        self.ticks.set(tick);
    }

    /// Advance by `ticks`.
    pub fn advance(&self, ticks: Tick) {
        self.ticks.set(self.ticks.get() + ticks);
    }
}

impl TickSource for GameClock {
    #[inline]
    fn now(&self) -> Tick {
        self.ticks.get()
    }
}
