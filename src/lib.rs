#![warn(missing_docs)]

//! Grid-based level documents: authoring edits, tolerant JSON save/load,
//! occupancy derivation, and reconciliation against external asset tables.
//!
//! A [`LevelDocument`] is built one [`EditOp`] at a time, persisted with
//! [`json`], and reconstructed on load; [`occupancy`] derives the free
//! cells and [`resolve`] settles asset references at consumption time.
//! Rendering, physics, and asset storage stay with the caller.

mod codec {
    pub mod json;
}
mod document;
mod edit;
mod error;
mod grid;
pub mod occupancy;
pub mod resolve;

pub use codec::json;
pub use document::{
    LevelDocument, PlacedBackground, PlacedPrefab, PlacedTile, TileLayer, DEFAULT_GRID_HEIGHT,
    DEFAULT_GRID_WIDTH, NO_BACKGROUND,
};
pub use edit::EditOp;
pub use error::LevelError;
pub use grid::{GridCoord, SPAWN_ABSENT};
