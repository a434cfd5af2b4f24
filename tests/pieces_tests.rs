//! Piece and rotation tests - catalog geometry and the wall-kick search

use blockfall::core::{attempt_rotate, collides, lookup, rotated_cw, shape_of, CatalogError, Grid};
use blockfall::PieceKind;

#[test]
fn test_catalog_covers_the_alphabet() {
    for key in "OTSZLJI".chars() {
        let shape = lookup(key).expect("catalog key");
        assert_eq!(
            shape.occupied_cells().count(),
            4,
            "key {} should name a four-cell piece",
            key
        );
        let kind = PieceKind::from_key(key).expect("catalog key");
        assert_eq!(kind.as_key(), key);
    }
}

#[test]
fn test_unknown_keys_are_rejected() {
    for key in ['X', 'o', '1', ' '] {
        assert_eq!(lookup(key), Err(CatalogError::UnknownPieceKey(key)));
    }
}

#[test]
fn test_standard_bounding_boxes() {
    let o = lookup('O').expect("catalog key");
    assert_eq!((o.width(), o.height()), (2, 2));

    for key in "TSZLJ".chars() {
        let shape = lookup(key).expect("catalog key");
        assert_eq!((shape.width(), shape.height()), (3, 3), "key {}", key);
    }

    let i = lookup('I').expect("catalog key");
    assert_eq!((i.width(), i.height()), (4, 4));
}

#[test]
fn test_cells_carry_per_piece_identity() {
    let mut seen = Vec::new();
    for kind in PieceKind::ALL {
        let value = kind.cell_value();
        assert!(value != 0);
        assert!(!seen.contains(&value), "ids must be distinct");
        seen.push(value);

        let shape = shape_of(kind);
        assert!(shape.occupied_cells().all(|(_, _, v)| v == value));
    }
}

#[test]
fn test_four_rotations_return_the_original() {
    for kind in PieceKind::ALL {
        let original = shape_of(kind);
        let mut shape = original.clone();
        for _ in 0..4 {
            shape = rotated_cw(&shape);
        }
        assert_eq!(shape, original, "kind {:?}", kind);
    }
}

#[test]
fn test_rotation_preserves_cell_count_and_value() {
    for kind in PieceKind::ALL {
        let rotated = rotated_cw(&shape_of(kind));
        assert_eq!(rotated.occupied_cells().count(), 4);
        assert!(rotated
            .occupied_cells()
            .all(|(_, _, v)| v == kind.cell_value()));
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let o = shape_of(PieceKind::O);
    assert_eq!(rotated_cw(&o), o);
}

#[test]
fn test_rotate_accepts_in_place_when_free() {
    let grid = Grid::new(8, 20).expect("valid dimensions");
    let shape = shape_of(PieceKind::T);

    let (rotated, x) = attempt_rotate(&grid, &shape, 3, 5).expect("free rotation");
    assert_eq!(x, 3);
    assert!(!collides(&grid, &rotated, x, 5));
}

#[test]
fn test_rotate_kicks_away_from_the_wall() {
    let grid = Grid::new(8, 20).expect("valid dimensions");

    // Vertical I flush against the left wall (its column is at sx=1, so the
    // origin sits one cell outside). Rotating to horizontal needs a kick.
    let vertical = shape_of(PieceKind::I);
    assert!(!collides(&grid, &vertical, -1, 3));

    let (horizontal, x) = attempt_rotate(&grid, &vertical, -1, 3).expect("kick should land");
    assert!(x > -1, "the piece must kick rightwards, got x={}", x);
    assert!(!collides(&grid, &horizontal, x, 3));
}

#[test]
fn test_rotate_abandons_in_a_cage() {
    // Fill the grid except the exact footprint of an unrotated T, so every
    // kick offset collides. The search must give up.
    let mut grid = Grid::new(8, 20).expect("valid dimensions");
    for x in 0..8i8 {
        for y in 0..20i8 {
            grid.set(x, y, 1);
        }
    }
    let shape = shape_of(PieceKind::T);
    for (sx, sy, _) in shape.occupied_cells() {
        grid.set(3 + sx as i8, 5 + sy as i8, 0);
    }

    assert!(!collides(&grid, &shape, 3, 5));
    assert!(attempt_rotate(&grid, &shape, 3, 5).is_none());
}
