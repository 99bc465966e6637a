//! Consumption-time reconciliation of a document against asset tables.
//!
//! Indices inside a [`LevelDocument`] are opaque foreign keys; only here,
//! with the caller's table lengths in hand, do they get bounds-checked.
//! An out-of-range record is skipped with a warning, never a failure:
//! one bad record must not abort a whole level load.

use std::collections::HashMap;

use tracing::warn;

use crate::document::{LevelDocument, PlacedBackground, PlacedPrefab, PlacedTile, TileLayer};
use crate::grid::GridCoord;

/// Lengths of the caller-supplied asset tables.
///
/// The tables themselves (tiles, prefabs, sprites) stay with the caller;
/// reconciliation only needs to know how many entries each one has.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTables {
    /// Number of tile assets.
    pub tile_count: usize,
    /// Number of prefab assets.
    pub prefab_count: usize,
    /// Number of background sprites.
    pub background_count: usize,
}

/// A document reconciled against asset tables, ready for scene building.
#[derive(Debug)]
pub struct ResolvedLevel<'a> {
    /// Winning tile per (layer, cell): the latest-appended valid record.
    pub tile_cells: HashMap<(TileLayer, GridCoord), &'a PlacedTile>,
    /// Valid prefabs in document order.
    pub prefabs: Vec<&'a PlacedPrefab>,
    /// Background view, when a valid sprite is selected.
    pub background: Option<PlacedBackground>,
    /// Records dropped for referencing outside their asset table.
    pub skipped: usize,
}

fn index_in_table(index: i32, len: usize) -> bool {
    index >= 0 && (index as usize) < len
}

/// Reconciles `doc` against `tables`.
///
/// Tiles are collapsed to one record per (layer, cell); iterating the
/// document in append order and letting later inserts overwrite earlier
/// ones makes the implicit editor precedence explicit. Skipped records
/// are counted and logged, and the rest of the level loads normally.
pub fn resolve<'a>(doc: &'a LevelDocument, tables: &AssetTables) -> ResolvedLevel<'a> {
    let mut skipped = 0usize;

    let mut tile_cells: HashMap<(TileLayer, GridCoord), &PlacedTile> = HashMap::new();
    for tile in &doc.tiles {
        if !index_in_table(tile.tile_index, tables.tile_count) {
            warn!(
                x = tile.position.x,
                y = tile.position.y,
                tile_index = tile.tile_index,
                "skipping tile with out-of-range asset index"
            );
            skipped += 1;
            continue;
        }
        let _ = tile_cells.insert((tile.layer, tile.position), tile);
    }

    let mut prefabs = Vec::with_capacity(doc.prefabs.len());
    for prefab in &doc.prefabs {
        if !index_in_table(prefab.prefab_index, tables.prefab_count) {
            warn!(
                x = prefab.position.x,
                y = prefab.position.y,
                prefab_index = prefab.prefab_index,
                "skipping prefab with out-of-range asset index"
            );
            skipped += 1;
            continue;
        }
        prefabs.push(prefab);
    }

    let background = doc.background().filter(|bg| {
        if index_in_table(bg.sprite_index, tables.background_count) {
            true
        } else {
            warn!(
                sprite_index = bg.sprite_index,
                "skipping background with out-of-range sprite index"
            );
            skipped += 1;
            false
        }
    });

    ResolvedLevel {
        tile_cells,
        prefabs,
        background,
        skipped,
    }
}
