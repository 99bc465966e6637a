use serde::{Deserialize, Serialize};

/// Integer cell address within a level grid.
///
/// Structural equality and hashing make this usable as a map/set key;
/// two coordinates with equal `x` and `y` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column, counted from the left edge of the grid.
    pub x: i32,
    /// Row, counted from the bottom edge of the grid.
    pub y: i32,
}

/// Sentinel encoding "no player spawn" in persisted documents.
///
/// Absence is encoded, never omitted: a spawn at the origin is `(0,0)`,
/// an absent spawn is `(-1,-1)`.
pub const SPAWN_ABSENT: GridCoord = GridCoord { x: -1, y: -1 };

impl GridCoord {
    /// Builds a coordinate from its components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        GridCoord { x, y }
    }

    /// Coordinate offset by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        GridCoord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord { x, y }
    }
}
