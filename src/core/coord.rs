//! Integer Grid Coordinates
//!
//! Signed cell coordinates so that a candidate position one step outside
//! the grid is representable before the bounds check rejects it.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
///
/// `x` grows rightward (columns), `y` grows downward (rows), matching the
/// top-to-bottom row order of the grid file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate displaced by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let c = Coord::new(3, 4);
        assert_eq!(c.offset(1, 0), Coord::new(4, 4));
        assert_eq!(c.offset(0, -1), Coord::new(3, 3));
        assert_eq!(c.offset(-4, -5), Coord::new(-1, -1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }
}
