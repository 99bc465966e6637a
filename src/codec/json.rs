//! JSON codec for level documents.
//!
//! The wire schema is self-describing: encode writes every field
//! explicitly, including the absent-spawn sentinel and empty
//! collections, so a decoder can tell "empty" from "missing." Decode is
//! tolerant the other way: any optional field an older save lacks gets
//! its documented default, and only structurally invalid text fails.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{LevelDocument, PlacedPrefab, PlacedTile, TileLayer, NO_BACKGROUND};
use crate::error::LevelError;
use crate::grid::{GridCoord, SPAWN_ABSENT};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonTile {
    position: GridCoord,
    tile_index: i32,
    tilemap_type: TileLayer,
    #[serde(default)]
    rotation: i32,
    #[serde(default)]
    flip_x: bool,
    #[serde(default)]
    flip_y: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonPrefab {
    position: GridCoord,
    prefab_index: i32,
    size: GridCoord,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonLevel {
    width: i32,
    height: i32,
    #[serde(default)]
    tiles: Vec<JsonTile>,
    #[serde(default)]
    prefabs: Vec<JsonPrefab>,
    #[serde(default)]
    patrol_points: Vec<GridCoord>,
    #[serde(default = "spawn_absent")]
    player_spawn: GridCoord,
    #[serde(default = "no_background")]
    background_sprite_index: i32,
}

fn spawn_absent() -> GridCoord {
    SPAWN_ABSENT
}
fn no_background() -> i32 {
    NO_BACKGROUND
}

impl From<JsonLevel> for LevelDocument {
    fn from(wire: JsonLevel) -> Self {
        LevelDocument {
            width: wire.width,
            height: wire.height,
            tiles: wire
                .tiles
                .into_iter()
                .map(|t| PlacedTile {
                    position: t.position,
                    tile_index: t.tile_index,
                    layer: t.tilemap_type,
                    rotation: t.rotation,
                    flip_x: t.flip_x,
                    flip_y: t.flip_y,
                })
                .collect(),
            prefabs: wire
                .prefabs
                .into_iter()
                .map(|p| PlacedPrefab {
                    position: p.position,
                    prefab_index: p.prefab_index,
                    size: p.size,
                })
                .collect(),
            patrol_points: wire.patrol_points,
            player_spawn: if wire.player_spawn == SPAWN_ABSENT {
                None
            } else {
                Some(wire.player_spawn)
            },
            background_sprite_index: wire.background_sprite_index,
        }
    }
}

impl From<&LevelDocument> for JsonLevel {
    fn from(doc: &LevelDocument) -> Self {
        JsonLevel {
            width: doc.width,
            height: doc.height,
            tiles: doc
                .tiles
                .iter()
                .map(|t| JsonTile {
                    position: t.position,
                    tile_index: t.tile_index,
                    tilemap_type: t.layer,
                    rotation: t.rotation,
                    flip_x: t.flip_x,
                    flip_y: t.flip_y,
                })
                .collect(),
            prefabs: doc
                .prefabs
                .iter()
                .map(|p| JsonPrefab {
                    position: p.position,
                    prefab_index: p.prefab_index,
                    size: p.size,
                })
                .collect(),
            patrol_points: doc.patrol_points.clone(),
            player_spawn: doc.player_spawn.unwrap_or(SPAWN_ABSENT),
            background_sprite_index: doc.background_sprite_index,
        }
    }
}

/// Decodes a level document from raw JSON bytes.
///
/// Fails only on structurally invalid text (malformed JSON, a wrongly
/// typed field such as a non-numeric width). A save written by an older
/// schema that lacks optional fields decodes with the documented
/// defaults instead: empty collections, absent spawn, no background,
/// rotation 0, flips false.
pub fn decode(bytes: &[u8]) -> Result<LevelDocument, LevelError> {
    let wire: JsonLevel = serde_json::from_slice(bytes)?;
    Ok(wire.into())
}

/// Encodes `doc` as pretty-printed JSON bytes.
pub fn encode(doc: &LevelDocument) -> Result<Vec<u8>, LevelError> {
    let wire = JsonLevel::from(doc);
    Ok(serde_json::to_vec_pretty(&wire)?)
}

fn require_json_extension(path: &Path) -> Result<(), LevelError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(LevelError::UnsupportedFormat(
            path.display().to_string(),
        ));
    }
    Ok(())
}

/// Reads and decodes a level file.
pub fn load_file(path: impl AsRef<Path>) -> Result<LevelDocument, LevelError> {
    let path = path.as_ref();
    require_json_extension(path)?;
    let bytes = fs::read(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes)
}

/// Encodes `doc` and writes it to a level file.
pub fn save_file(doc: &LevelDocument, path: impl AsRef<Path>) -> Result<(), LevelError> {
    let path = path.as_ref();
    require_json_extension(path)?;
    let bytes = encode(doc)?;
    fs::write(path, bytes).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })
}
