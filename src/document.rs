use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::grid::GridCoord;

/// Default grid dimensions for a freshly opened authoring session.
pub const DEFAULT_GRID_WIDTH: i32 = 10;
/// See [`DEFAULT_GRID_WIDTH`].
pub const DEFAULT_GRID_HEIGHT: i32 = 10;

/// One of the parallel tilemap layers a tile can be painted on.
///
/// Closed set: adding a member is a compatible schema change, removing
/// one is not. Encodes as the variant name; decode also accepts the
/// integer discriminants 0/1/2 that older saves carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileLayer {
    /// Solid wall layer.
    Walls,
    /// Walkable ground layer.
    Ground,
    /// Obstacle layer above ground.
    Obstacles,
}

impl TileLayer {
    /// Stable wire name of the layer.
    pub fn name(self) -> &'static str {
        match self {
            TileLayer::Walls => "Walls",
            TileLayer::Ground => "Ground",
            TileLayer::Obstacles => "Obstacles",
        }
    }

    fn from_index(idx: u64) -> Option<Self> {
        match idx {
            0 => Some(TileLayer::Walls),
            1 => Some(TileLayer::Ground),
            2 => Some(TileLayer::Obstacles),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Walls" => Some(TileLayer::Walls),
            "Ground" => Some(TileLayer::Ground),
            "Obstacles" => Some(TileLayer::Obstacles),
            _ => None,
        }
    }
}

impl Serialize for TileLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct TileLayerVisitor;

impl Visitor<'_> for TileLayerVisitor {
    type Value = TileLayer;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a tilemap layer name or index 0..=2")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TileLayer, E> {
        TileLayer::from_name(v).ok_or_else(|| {
            de::Error::unknown_variant(v, &["Walls", "Ground", "Obstacles"])
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TileLayer, E> {
        TileLayer::from_index(v)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TileLayer, E> {
        u64::try_from(v)
            .ok()
            .and_then(TileLayer::from_index)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

impl<'de> Deserialize<'de> for TileLayer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TileLayerVisitor)
    }
}

/// One painted tile.
///
/// Several records may share a position as long as they differ in
/// `layer`; within one (position, layer) pair the latest-appended record
/// wins at consumption time, but earlier duplicates stay in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    /// Cell the tile is painted on.
    pub position: GridCoord,
    /// Opaque index into the caller's tile asset table.
    pub tile_index: i32,
    /// Tilemap layer the tile belongs to.
    pub layer: TileLayer,
    /// Rotation in degrees, nominally one of 0/90/180/270.
    pub rotation: i32,
    /// Horizontal mirror flag.
    pub flip_x: bool,
    /// Vertical mirror flag.
    pub flip_y: bool,
}

/// One placed prefab instance, anchored at `position` and covering the
/// rectangle of cells up to `position + size - 1` inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPrefab {
    /// Anchor cell (lower-left corner of the footprint).
    pub position: GridCoord,
    /// Opaque index into the caller's prefab asset table.
    pub prefab_index: i32,
    /// Footprint extent in cells; non-positive components yield an
    /// empty footprint and are preserved verbatim.
    pub size: GridCoord,
}

/// The single background layer of a level, as consumers see it.
///
/// Documents persist only the sprite index; this view is synthesized on
/// demand with neutral orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBackground {
    /// Opaque index into the caller's background sprite table.
    pub sprite_index: i32,
    /// Rotation in degrees.
    pub rotation: i32,
    /// Horizontal mirror flag.
    pub flip_x: bool,
    /// Vertical mirror flag.
    pub flip_y: bool,
}

/// Index value meaning "no background selected."
pub const NO_BACKGROUND: i32 = -1;

/// A complete level grid: the unit of authoring and persistence.
///
/// `tiles` and `prefabs` keep authoring append order; `patrol_points`
/// is an insertion-ordered set (the toggle edit keeps it duplicate-free).
/// Positions outside `[0,width) x [0,height)` are carried verbatim so an
/// editor state temporarily out of bounds survives a save/load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDocument {
    /// Grid width in cells; positive.
    pub width: i32,
    /// Grid height in cells; positive.
    pub height: i32,
    /// Painted tiles in append order.
    pub tiles: Vec<PlacedTile>,
    /// Placed prefabs in append order.
    pub prefabs: Vec<PlacedPrefab>,
    /// Patrol cells; membership is what matters, order is append order.
    pub patrol_points: Vec<GridCoord>,
    /// Player spawn cell, if one has been placed.
    pub player_spawn: Option<GridCoord>,
    /// Selected background sprite, [`NO_BACKGROUND`] if none.
    pub background_sprite_index: i32,
}

impl LevelDocument {
    /// Empty document over a `width` x `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        LevelDocument {
            width,
            height,
            tiles: Vec::new(),
            prefabs: Vec::new(),
            patrol_points: Vec::new(),
            player_spawn: None,
            background_sprite_index: NO_BACKGROUND,
        }
    }

    /// Whether `cell` lies inside the grid rectangle.
    pub fn in_bounds(&self, cell: GridCoord) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Background record, or `None` when no sprite is selected.
    pub fn background(&self) -> Option<PlacedBackground> {
        if self.background_sprite_index == NO_BACKGROUND {
            return None;
        }
        Some(PlacedBackground {
            sprite_index: self.background_sprite_index,
            rotation: 0,
            flip_x: false,
            flip_y: false,
        })
    }
}

impl Default for LevelDocument {
    fn default() -> Self {
        LevelDocument::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}
