//! Row-major cell indexer.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

use super::traits::CellIndexer;

/// Row-major indexer for a `width x height` map: `index = y * width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridIndexer {
    width: usize,
    height: usize,
}

impl GridIndexer {
    /// Create an indexer for the given map size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Map width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

impl CellIndexer for GridIndexer {
    #[inline]
    fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    #[inline]
    fn in_bounds(&self, cell: GridCoord) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    #[inline]
    fn cell_to_index(&self, cell: GridCoord) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        (cell.y as usize)
            .checked_mul(self.width)?
            .checked_add(cell.x as usize)
    }

    #[inline]
    fn index_to_cell(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let indexer = GridIndexer::new(10, 5);
        assert_eq!(indexer.cell_count(), 50);

        for i in 0..indexer.cell_count() {
            let cell = indexer.index_to_cell(i);
            assert_eq!(indexer.cell_to_index(cell), Some(i));
        }
    }

    #[test]
    fn test_row_major_layout() {
        let indexer = GridIndexer::new(10, 5);
        assert_eq!(indexer.cell_to_index(GridCoord::new(3, 2)), Some(23));
        assert_eq!(indexer.index_to_cell(23), GridCoord::new(3, 2));
    }

    #[test]
    fn test_out_of_bounds() {
        let indexer = GridIndexer::new(10, 5);
        assert_eq!(indexer.cell_to_index(GridCoord::new(-1, 0)), None);
        assert_eq!(indexer.cell_to_index(GridCoord::new(0, -1)), None);
        assert_eq!(indexer.cell_to_index(GridCoord::new(10, 0)), None);
        assert_eq!(indexer.cell_to_index(GridCoord::new(0, 5)), None);
        assert!(!indexer.in_bounds(GridCoord::new(10, 4)));
        assert!(indexer.in_bounds(GridCoord::new(9, 4)));
    }

    #[test]
    fn test_oversized_indexer_does_not_wrap() {
        let indexer = GridIndexer::new(usize::MAX, 4);
        assert_eq!(indexer.cell_count(), usize::MAX);
        assert_eq!(indexer.cell_to_index(GridCoord::new(7, 0)), Some(7));
        assert_eq!(indexer.cell_to_index(GridCoord::new(0, 3)), None);
    }
}
