//! Dense cover layer.
//!
//! A minimal [`CoverMap`] for hosts that do not already keep their own
//! occupancy lookup, and for tests. Fill and category live in separate
//! arrays, indexed row-major.

use crate::core::{CoverThing, Fillage, GridCoord, ThingCategory};

use super::config::{ConfigError, checked_area};
use super::indexer::GridIndexer;
use super::traits::{CellIndexer, CoverMap};

/// Per-cell occupant classification of a map.
#[derive(Clone, Debug)]
pub struct CoverGrid {
    fillage: Vec<Fillage>,
    categories: Vec<ThingCategory>,
    indexer: GridIndexer,
}

impl CoverGrid {
    /// Create an empty layer for a `width x height` map.
    ///
    /// # Panics
    /// If the map is too large to index. Use [`try_new`](Self::try_new)
    /// for sizes that come from user input.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(cover) => cover,
            Err(e) => panic!("invalid cover grid size: {e}"),
        }
    }

    /// Create an empty layer, reporting sizes that cannot be indexed.
    pub fn try_new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let size = checked_area(width, height)?;
        Ok(Self {
            fillage: vec![Fillage::None; size],
            categories: vec![ThingCategory::default(); size],
            indexer: GridIndexer::new(width, height),
        })
    }

    /// Map width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.indexer.width()
    }

    /// Map height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.indexer.height()
    }

    /// Place an object. Returns false if the cell is off the map.
    pub fn place(&mut self, cell: GridCoord, thing: CoverThing) -> bool {
        match self.indexer.cell_to_index(cell) {
            Some(i) => {
                self.fillage[i] = thing.fillage;
                self.categories[i] = thing.category;
                true
            }
            None => false,
        }
    }

    /// Place the same object along a straight run of cells.
    pub fn place_line(&mut self, from: GridCoord, to: GridCoord, thing: CoverThing) -> usize {
        super::raycaster::BresenhamLine::new(from, to)
            .filter(|&cell| self.place(cell, thing))
            .count()
    }

    /// Empty a cell.
    pub fn remove(&mut self, cell: GridCoord) {
        if let Some(i) = self.indexer.cell_to_index(cell) {
            self.fillage[i] = Fillage::None;
            self.categories[i] = ThingCategory::default();
        }
    }

    /// Number of cells whose occupant counts as cover.
    pub fn cover_cells(&self) -> usize {
        self.fillage
            .iter()
            .zip(&self.categories)
            .filter(|&(&fillage, &category)| CoverThing::new(fillage, category).provides_cover())
            .count()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.fillage.fill(Fillage::None);
        self.categories.fill(ThingCategory::default());
    }
}

impl CoverMap for CoverGrid {
    #[inline]
    fn cover_at(&self, cell: GridCoord) -> Option<CoverThing> {
        let i = self.indexer.cell_to_index(cell)?;
        match self.fillage[i] {
            Fillage::None => None,
            fillage => Some(CoverThing::new(fillage, self.categories[i])),
        }
    }
}
