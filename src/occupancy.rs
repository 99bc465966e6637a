//! Derived occupancy over a level grid.
//!
//! Recomputed from scratch per call; a document load is the expected
//! trigger, so no incremental maintenance is kept.

use std::collections::HashSet;

use crate::document::LevelDocument;
use crate::grid::GridCoord;

/// Every cell covered by a tile or a prefab footprint.
///
/// Footprint cells outside the grid rectangle are included here verbatim;
/// [`empty_cells`] never enumerates them, so they simply cannot appear
/// free. Patrol points and the player spawn never occupy a cell.
pub fn occupied_cells(doc: &LevelDocument) -> HashSet<GridCoord> {
    let mut occupied = HashSet::with_capacity(doc.tiles.len());

    for tile in &doc.tiles {
        let _ = occupied.insert(tile.position);
    }

    for prefab in &doc.prefabs {
        // Non-positive size means an empty range, so anomalous records
        // contribute nothing rather than wrapping.
        for dy in 0..prefab.size.y {
            for dx in 0..prefab.size.x {
                let _ = occupied.insert(prefab.position.offset(dx, dy));
            }
        }
    }

    occupied
}

/// Cells of the `width` x `height` rectangle not covered by any tile or
/// prefab footprint, row-major: `y` ascending outer, `x` ascending inner.
pub fn empty_cells(doc: &LevelDocument) -> Vec<GridCoord> {
    let occupied = occupied_cells(doc);

    let mut empty = Vec::new();
    for y in 0..doc.height {
        for x in 0..doc.width {
            let cell = GridCoord::new(x, y);
            if !occupied.contains(&cell) {
                empty.push(cell);
            }
        }
    }
    empty
}
