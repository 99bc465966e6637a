// tests/document_tests.rs

use tilegrid_level::{EditOp, GridCoord, LevelDocument, TileLayer};

fn paint(layer: TileLayer, tile_index: i32, erase: bool) -> EditOp {
    EditOp::PaintTile {
        layer,
        tile_index,
        rotation: 0,
        flip_x: false,
        flip_y: false,
        erase,
    }
}

#[test]
fn painting_tiles_accumulates_duplicates() {
    let mut doc = LevelDocument::new(4, 4);
    let cell = GridCoord::new(2, 2);

    doc.apply_at(cell, &paint(TileLayer::Ground, 0, false));
    doc.apply_at(cell, &paint(TileLayer::Ground, 5, false));

    assert_eq!(doc.tiles.len(), 2);
    assert_eq!(doc.tiles[1].tile_index, 5);
}

#[test]
fn erasing_a_tile_is_scoped_to_its_layer() {
    let mut doc = LevelDocument::new(4, 4);
    let cell = GridCoord::new(1, 3);

    doc.apply_at(cell, &paint(TileLayer::Walls, 0, false));
    doc.apply_at(cell, &paint(TileLayer::Ground, 1, false));
    doc.apply_at(cell, &paint(TileLayer::Walls, 2, false));

    doc.apply_at(cell, &paint(TileLayer::Walls, 0, true));

    assert_eq!(doc.tiles.len(), 1);
    assert_eq!(doc.tiles[0].layer, TileLayer::Ground);
    assert_eq!(doc.tiles[0].tile_index, 1);
}

#[test]
fn erasing_removes_all_matching_records_not_just_the_latest() {
    let mut doc = LevelDocument::new(4, 4);
    let cell = GridCoord::new(0, 0);

    doc.apply_at(cell, &paint(TileLayer::Obstacles, 0, false));
    doc.apply_at(cell, &paint(TileLayer::Obstacles, 1, false));
    doc.apply_at(cell, &paint(TileLayer::Obstacles, 2, false));
    doc.apply_at(cell, &paint(TileLayer::Obstacles, 0, true));

    assert!(doc.tiles.is_empty());
}

#[test]
fn painted_prefabs_get_a_unit_footprint() {
    let mut doc = LevelDocument::new(4, 4);
    doc.apply_at(
        GridCoord::new(3, 1),
        &EditOp::PaintPrefab {
            prefab_index: 2,
            erase: false,
        },
    );

    assert_eq!(doc.prefabs.len(), 1);
    assert_eq!(doc.prefabs[0].size, GridCoord::new(1, 1));
}

#[test]
fn erasing_a_prefab_ignores_its_index() {
    let mut doc = LevelDocument::new(4, 4);
    let cell = GridCoord::new(1, 1);
    for idx in [0, 3] {
        doc.apply_at(
            cell,
            &EditOp::PaintPrefab {
                prefab_index: idx,
                erase: false,
            },
        );
    }

    doc.apply_at(
        cell,
        &EditOp::PaintPrefab {
            prefab_index: 9,
            erase: true,
        },
    );

    assert!(doc.prefabs.is_empty());
}

#[test]
fn spawn_toggle_is_single_slot_and_self_inverse() {
    let mut doc = LevelDocument::new(4, 4);
    let a = GridCoord::new(0, 1);
    let b = GridCoord::new(2, 2);

    doc.apply_at(a, &EditOp::ToggleSpawn);
    assert_eq!(doc.player_spawn, Some(a));

    // Toggling a different cell overwrites rather than accumulating.
    doc.apply_at(b, &EditOp::ToggleSpawn);
    assert_eq!(doc.player_spawn, Some(b));

    doc.apply_at(b, &EditOp::ToggleSpawn);
    assert_eq!(doc.player_spawn, None);
}

#[test]
fn patrol_toggle_is_an_involution() {
    let mut doc = LevelDocument::new(4, 4);
    let cell = GridCoord::new(3, 3);

    doc.apply_at(cell, &EditOp::TogglePatrol);
    assert_eq!(doc.patrol_points, vec![cell]);

    doc.apply_at(cell, &EditOp::TogglePatrol);
    assert!(doc.patrol_points.is_empty());
}

#[test]
fn out_of_range_edits_are_recorded_like_any_other() {
    let mut doc = LevelDocument::new(2, 2);
    let outside = GridCoord::new(9, -3);
    assert!(!doc.in_bounds(outside));

    doc.apply_at(outside, &paint(TileLayer::Ground, 0, false));
    doc.apply_at(outside, &EditOp::TogglePatrol);

    assert_eq!(doc.tiles[0].position, outside);
    assert_eq!(doc.patrol_points, vec![outside]);
}
