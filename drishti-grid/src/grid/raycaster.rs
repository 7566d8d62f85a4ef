//! Bresenham line tracing for cover probes.
//!
//! The cover check walks a short segment from a cell away from the
//! threat direction and looks at every cell on it. Cells are produced by
//! the integer Bresenham algorithm:
//!
//! ```text
//! From (0,0) to (4,-2):
//!
//!     0 ●●
//!    -1   ●●
//!    -2     ●
//!       └──────────
//!        0 1 2 3 4
//! ```
//!
//! Both end points are yielded, the start first.

use crate::core::GridCoord;

use super::traits::LineTracer;

/// Bresenham's line algorithm iterator.
///
/// Generates all grid cells along a line from start to end using integer
/// arithmetic only. Steps run in `i64`, so any two `i32` cells are valid
/// end points; every yielded cell lies between them.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    x_inc: i64,
    y_inc: i64,
    error: i64,
    steep: bool,
    end_x: i64,
    end_y: i64,
    done: bool,
}

impl BresenhamLine {
    /// Create a new Bresenham line iterator from start to end coordinates.
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let (sx, sy) = (i64::from(start.x), i64::from(start.y));
        let (ex, ey) = (i64::from(end.x), i64::from(end.y));
        let dx = (ex - sx).abs();
        let dy = (ey - sy).abs();
        let steep = dy > dx;

        let (x, y, end_x, end_y, dx, dy) = if steep {
            (sy, sx, ey, ex, dy, dx)
        } else {
            (sx, sy, ex, ey, dx, dy)
        };

        let x_inc = if end_x > x { 1 } else { -1 };
        let y_inc = if end_y > y { 1 } else { -1 };

        Self {
            x,
            y,
            dx,
            dy,
            x_inc,
            y_inc,
            error: dx / 2,
            steep,
            end_x,
            end_y,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // x and y never leave the [start, end] box, so they fit i32
        let result = if self.steep {
            GridCoord::new(self.y as i32, self.x as i32)
        } else {
            GridCoord::new(self.x as i32, self.y as i32)
        };

        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(result);
        }

        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.y_inc;
            self.error += self.dx;
        }
        self.x += self.x_inc;

        Some(result)
    }
}

/// Stateless [`LineTracer`] backed by [`BresenhamLine`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BresenhamTracer;

impl LineTracer for BresenhamTracer {
    #[inline]
    fn trace(&self, from: GridCoord, to: GridCoord) -> impl Iterator<Item = GridCoord> {
        BresenhamLine::new(from, to)
    }
}
