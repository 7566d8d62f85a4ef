//! The sight grid: per-cell hostile observation pressure for one faction.

use crate::core::{FactionId, GameClock, GridCoord, Tick, TickSource, Vec2};

use super::config::{ConfigError, SightGridConfig, record_bytes};
use super::indexer::GridIndexer;
use super::raycaster::BresenhamTracer;
use super::rating::exposure_rating;
use super::record::{SightRecord, UNSET_SIGNATURE};
use super::traits::{CellIndexer, CoverMap, LineTracer};
use super::types::{ObserveResult, SetOutcome, SightReading, SightStats};

/// Observation pressure grid for a single map and faction.
///
/// Usage per tick:
///
/// 1. [`next`](Self::next) with the pass center (usually the unit being
///    evaluated);
/// 2. [`set`](Self::set) for every cell a hostile observer sees;
/// 3. any of the read queries, any number of times.
///
/// Not thread-safe; one writer pass per tick on one thread.
pub struct SightGrid<C = GameClock, I = GridIndexer, T = BresenhamTracer>
where
    C: TickSource,
    I: CellIndexer,
    T: LineTracer,
{
    records: Vec<SightRecord>,
    indexer: I,
    clock: C,
    tracer: T,
    faction: FactionId,
    center: GridCoord,
    signature: i32,
    config: SightGridConfig,
}

impl<C: TickSource> SightGrid<C> {
    /// Create a grid with the default row-major indexer and Bresenham tracer.
    ///
    /// # Panics
    /// If the configuration is invalid (zero-area map, negative interval,
    /// out-of-range rating parameters). Use [`try_new`](Self::try_new) for
    /// configs that come from user input.
    pub fn new(config: SightGridConfig, faction: FactionId, clock: C) -> Self {
        match Self::try_new(config, faction, clock) {
            Ok(grid) => grid,
            Err(e) => panic!("invalid sight grid configuration: {e}"),
        }
    }

    /// Create a grid, reporting configuration errors.
    pub fn try_new(
        config: SightGridConfig,
        faction: FactionId,
        clock: C,
    ) -> Result<Self, ConfigError> {
        let indexer = GridIndexer::new(config.width, config.height);
        Self::with_services(config, faction, clock, indexer, BresenhamTracer)
    }
}

impl<C, I, T> SightGrid<C, I, T>
where
    C: TickSource,
    I: CellIndexer,
    T: LineTracer,
{
    /// Create a grid with host-provided indexer and line tracer.
    ///
    /// The record array is sized from the indexer's cell count, which must
    /// be non-zero and small enough to allocate.
    pub fn with_services(
        config: SightGridConfig,
        faction: FactionId,
        clock: C,
        indexer: I,
        tracer: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let cell_count = indexer.cell_count();
        if cell_count == 0 {
            return Err(ConfigError::ZeroArea {
                width: config.width,
                height: config.height,
            });
        }
        if record_bytes(cell_count).is_none() {
            return Err(ConfigError::TooLarge {
                width: config.width,
                height: config.height,
            });
        }

        log::debug!(
            "Creating sight grid for {}: {} cells, update interval {} ticks",
            faction,
            cell_count,
            config.update_interval
        );

        Ok(Self {
            records: vec![SightRecord::UNSET; cell_count],
            indexer,
            clock,
            tracer,
            faction,
            center: GridCoord::default(),
            signature: 0,
            config,
        })
    }

    // === Basic Properties ===

    /// Owning faction.
    #[inline]
    pub fn faction(&self) -> FactionId {
        self.faction
    }

    /// Ticks a window stays live, and the grace period after it.
    #[inline]
    pub fn update_interval(&self) -> Tick {
        self.config.update_interval
    }

    /// Signature of the current pass.
    #[inline]
    pub fn signature(&self) -> i32 {
        self.signature
    }

    /// Center of the current pass.
    #[inline]
    pub fn center(&self) -> GridCoord {
        self.center
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.records.len()
    }

    /// Map dimensions (width, height) in cells as configured.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.config.width, self.config.height)
    }

    /// Configuration the grid was built with.
    #[inline]
    pub fn config(&self) -> &SightGridConfig {
        &self.config
    }

    /// The cell indexer.
    #[inline]
    pub fn indexer(&self) -> &I {
        &self.indexer
    }

    /// The tick source.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === Writer Pass ===

    /// Start a new writer pass anchored at `center`.
    ///
    /// Must be called before the `set` calls of a tick; until the next call
    /// every cell can be counted at most once.
    pub fn next(&mut self, center: GridCoord) {
        self.signature = self.signature.wrapping_add(1);
        if self.signature == UNSET_SIGNATURE {
            self.signature = self.signature.wrapping_add(1);
        }
        self.center = center;
        log::trace!(
            "{} sight pass {} at ({}, {})",
            self.faction,
            self.signature,
            center.x,
            center.y
        );
    }

    /// Record that a hostile observer sees `cell`.
    #[inline]
    pub fn set(&mut self, cell: GridCoord) -> SetOutcome {
        match self.indexer.cell_to_index(cell) {
            Some(index) => self.observe_index(index, cell),
            None => SetOutcome::OutOfBounds,
        }
    }

    /// Record that a hostile observer sees the cell at `index`.
    #[inline]
    pub fn set_index(&mut self, index: usize) -> SetOutcome {
        if index >= self.records.len() {
            return SetOutcome::OutOfBounds;
        }
        let cell = self.indexer.index_to_cell(index);
        self.observe_index(index, cell)
    }

    #[inline]
    fn observe_index(&mut self, index: usize, cell: GridCoord) -> SetOutcome {
        let now = self.clock.now();
        let offset = cell.offset_from(self.center);
        self.records[index].observe(self.signature, offset, now, self.config.update_interval)
    }

    /// One full writer pass: [`next`](Self::next) then [`set`](Self::set)
    /// for every cell.
    pub fn observe<It>(&mut self, center: GridCoord, cells: It) -> ObserveResult
    where
        It: IntoIterator<Item = GridCoord>,
    {
        self.next(center);
        let mut result = ObserveResult::default();
        for cell in cells {
            result.record(self.set(cell));
        }
        log::trace!(
            "{} pass {}: {} cells updated, {} skipped, {} off map",
            self.faction,
            self.signature,
            result.cells_updated(),
            result.skipped,
            result.out_of_bounds
        );
        result
    }

    // === Queries ===

    /// Record of a cell, `None` if off the map.
    #[inline]
    pub fn record(&self, cell: GridCoord) -> Option<&SightRecord> {
        self.indexer
            .cell_to_index(cell)
            .and_then(|i| self.records.get(i))
    }

    /// Record at an index, `None` if out of range.
    #[inline]
    pub fn record_at(&self, index: usize) -> Option<&SightRecord> {
        self.records.get(index)
    }

    /// Readable record: in bounds and not past the grace window.
    #[inline]
    fn readable(&self, index: Option<usize>) -> Option<&SightRecord> {
        let record = self.records.get(index?)?;
        if record.is_expired(self.clock.now(), self.config.update_interval) {
            None
        } else {
            Some(record)
        }
    }

    /// Observation pressure on a cell: the larger window count, 0 once
    /// the record has fully expired.
    #[inline]
    pub fn value(&self, cell: GridCoord) -> u32 {
        self.value_at_opt(self.indexer.cell_to_index(cell))
    }

    /// [`value`](Self::value) by index.
    #[inline]
    pub fn value_at(&self, index: usize) -> u32 {
        self.value_at_opt(Some(index))
    }

    fn value_at_opt(&self, index: Option<usize>) -> u32 {
        self.readable(index)
            .map_or(0, |record| u32::from(record.value()))
    }

    /// Summed sight direction of the dominant window.
    #[inline]
    pub fn direction(&self, cell: GridCoord) -> Vec2 {
        self.sight(cell).direction
    }

    /// [`direction`](Self::direction) by index.
    #[inline]
    pub fn direction_at(&self, index: usize) -> Vec2 {
        self.sight_at(index).direction
    }

    /// Dominant direction together with its observer count.
    #[inline]
    pub fn sight(&self, cell: GridCoord) -> SightReading {
        self.sight_at_opt(self.indexer.cell_to_index(cell))
    }

    /// [`sight`](Self::sight) by index.
    #[inline]
    pub fn sight_at(&self, index: usize) -> SightReading {
        self.sight_at_opt(Some(index))
    }

    fn sight_at_opt(&self, index: Option<usize>) -> SightReading {
        match self.readable(index) {
            Some(record) => {
                let (direction, enemies) = record.dominant();
                SightReading {
                    direction,
                    enemies: u32::from(enemies),
                }
            }
            None => SightReading::NONE,
        }
    }

    /// Is there partial cover between `cell` and the current threat direction?
    ///
    /// Casts a probe of `rating.probe_length` cells from `cell` opposite to
    /// the current window's direction and reports whether any on-map cell
    /// along it holds a partial-fill, non-plant object.
    pub fn has_cover<M: CoverMap + ?Sized>(&self, cell: GridCoord, cover: &M) -> bool {
        let Some(record) = self.readable(self.indexer.cell_to_index(cell)) else {
            return false;
        };

        let away = -record.direction().normalize();
        let end = cell + (away * self.config.rating.probe_length).truncate();
        self.tracer.trace(cell, end).any(|c| {
            self.indexer.in_bounds(c)
                && cover
                    .cover_at(c)
                    .is_some_and(|thing| thing.provides_cover())
        })
    }

    /// [`has_cover`](Self::has_cover) by index.
    pub fn has_cover_at<M: CoverMap + ?Sized>(&self, index: usize, cover: &M) -> bool {
        if index >= self.records.len() {
            return false;
        }
        self.has_cover(self.indexer.index_to_cell(index), cover)
    }

    /// Exposure score of a cell, halved when it has cover.
    ///
    /// Higher means more exposed. 0 for unseen cells.
    pub fn cover_rating<M: CoverMap + ?Sized>(&self, cell: GridCoord, cover: &M) -> f32 {
        let reading = self.sight(cell);
        let rating = exposure_rating(reading.direction, reading.enemies, &self.config.rating);
        if rating > 0.0 && self.has_cover(cell, cover) {
            rating * 0.5
        } else {
            rating
        }
    }

    /// [`cover_rating`](Self::cover_rating) by index.
    pub fn cover_rating_at<M: CoverMap + ?Sized>(&self, index: usize, cover: &M) -> f32 {
        if index >= self.records.len() {
            return 0.0;
        }
        self.cover_rating(self.indexer.index_to_cell(index), cover)
    }

    // === Maintenance ===

    /// Count records by state. Walks the whole array.
    pub fn stats(&self) -> SightStats {
        let now = self.clock.now();
        let interval = self.config.update_interval;
        let mut stats = SightStats::default();
        for record in &self.records {
            if record.is_unset() {
                stats.unset += 1;
            } else if record.is_expired(now, interval) {
                stats.expired += 1;
            } else {
                stats.live += 1;
                stats.peak = stats.peak.max(u32::from(record.value()));
            }
        }
        stats
    }

    /// Return every record to the unset state.
    pub fn clear(&mut self) {
        self.records.fill(SightRecord::UNSET);
        log::debug!("Cleared sight grid for {}", self.faction);
    }
}
