//! Collaborator interfaces of the sight grid.
//!
//! The grid owns only its record array. Mapping cells to indices, tracing
//! probe lines and classifying what stands in a cell belong to the host
//! simulation, which plugs them in through these traits. Default
//! implementations live in [`indexer`](super::indexer),
//! [`raycaster`](super::raycaster) and [`cover_map`](super::cover_map).

use crate::core::{CoverThing, GridCoord};

/// Bidirectional mapping between cell coordinates and dense indices.
pub trait CellIndexer {
    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Is the coordinate on the map?
    fn in_bounds(&self, cell: GridCoord) -> bool;

    /// Dense index of a cell, `None` if it is off the map.
    fn cell_to_index(&self, cell: GridCoord) -> Option<usize>;

    /// Cell at a dense index. Only meaningful for `index < cell_count()`.
    fn index_to_cell(&self, index: usize) -> GridCoord;
}

/// Produces the cells on a segment between two cells.
///
/// Each call starts a fresh sequence; the sequence is finite and lazy.
pub trait LineTracer {
    /// Cells from `from` to `to`, both ends included.
    fn trace(&self, from: GridCoord, to: GridCoord) -> impl Iterator<Item = GridCoord>;
}

/// Answers what physical object, if any, occupies a cell.
pub trait CoverMap {
    /// The cover-relevant occupant of `cell`, or `None` if empty.
    fn cover_at(&self, cell: GridCoord) -> Option<CoverThing>;
}

impl<T: CoverMap + ?Sized> CoverMap for &T {
    #[inline]
    fn cover_at(&self, cell: GridCoord) -> Option<CoverThing> {
        (**self).cover_at(cell)
    }
}
