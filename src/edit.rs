//! Authoring edits: one discrete user action applied to a document.
//!
//! Edits carry their own settings instead of reading ambient tool state,
//! so callers own the document and the action outright. No edit ever
//! fails or bounds-checks its target cell; offering only sensible cells
//! is the authoring UI's job.

use crate::document::{LevelDocument, PlacedPrefab, PlacedTile, TileLayer};
use crate::grid::GridCoord;

/// One discrete authoring action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Paint (or erase) a tile on one tilemap layer.
    PaintTile {
        /// Layer the tile goes on; erase is scoped to this layer.
        layer: TileLayer,
        /// Selected tile asset index.
        tile_index: i32,
        /// Rotation in degrees.
        rotation: i32,
        /// Horizontal mirror flag.
        flip_x: bool,
        /// Vertical mirror flag.
        flip_y: bool,
        /// When set, removes every matching tile instead of painting.
        erase: bool,
    },
    /// Place (or erase) a prefab with a 1x1 footprint.
    PaintPrefab {
        /// Selected prefab asset index.
        prefab_index: i32,
        /// When set, removes every prefab anchored at the cell.
        erase: bool,
    },
    /// Toggle the single player-spawn slot at the cell.
    ToggleSpawn,
    /// Toggle patrol-point membership of the cell.
    TogglePatrol,
}

impl LevelDocument {
    /// Applies one edit at `cell`.
    ///
    /// Painting a tile appends; duplicates at the same (cell, layer)
    /// accumulate by design and are resolved last-write-wins at
    /// consumption time. Erasing removes *all* matching records, not
    /// just the most recent.
    pub fn apply_at(&mut self, cell: GridCoord, op: &EditOp) {
        match *op {
            EditOp::PaintTile {
                layer,
                tile_index,
                rotation,
                flip_x,
                flip_y,
                erase,
            } => {
                if erase {
                    self.tiles
                        .retain(|t| !(t.position == cell && t.layer == layer));
                } else {
                    self.tiles.push(PlacedTile {
                        position: cell,
                        tile_index,
                        layer,
                        rotation,
                        flip_x,
                        flip_y,
                    });
                }
            }
            EditOp::PaintPrefab { prefab_index, erase } => {
                if erase {
                    self.prefabs.retain(|p| p.position != cell);
                } else {
                    self.prefabs.push(PlacedPrefab {
                        position: cell,
                        prefab_index,
                        size: GridCoord::new(1, 1),
                    });
                }
            }
            EditOp::ToggleSpawn => {
                // Single slot: re-toggling the current spawn clears it,
                // any other cell overwrites.
                if self.player_spawn == Some(cell) {
                    self.player_spawn = None;
                } else {
                    self.player_spawn = Some(cell);
                }
            }
            EditOp::TogglePatrol => {
                if let Some(idx) = self.patrol_points.iter().position(|&p| p == cell) {
                    let _ = self.patrol_points.remove(idx);
                } else {
                    self.patrol_points.push(cell);
                }
            }
        }
    }
}
