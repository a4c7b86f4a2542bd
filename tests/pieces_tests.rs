//! Piece catalog tests: spawn shapes, spawn placement and rotation.

use brickdrop::core::{spawn_matrix, spawn_x};
use brickdrop::types::PieceKind;

#[test]
fn test_catalog_has_seven_pieces() {
    assert_eq!(PieceKind::ALL.len(), 7);

    let mut values: Vec<u8> = PieceKind::ALL.iter().map(|k| k.cell_value()).collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_cell_value_round_trips() {
    for kind in PieceKind::ALL {
        assert_eq!(PieceKind::from_cell_value(kind.cell_value()), Some(kind));
    }
    assert_eq!(PieceKind::from_cell_value(0), None);
    assert_eq!(PieceKind::from_cell_value(8), None);
}

#[test]
fn test_every_piece_has_four_cells_of_its_value() {
    for kind in PieceKind::ALL {
        let matrix = spawn_matrix(kind);
        let cells: Vec<_> = matrix.occupied_cells().collect();

        assert_eq!(cells.len(), 4, "{kind:?} should cover four cells");
        assert!(cells.iter().all(|&(_, _, v)| v == kind.cell_value()));
    }
}

#[test]
fn test_matrix_sizes() {
    assert_eq!(spawn_matrix(PieceKind::I).size(), 4);
    assert_eq!(spawn_matrix(PieceKind::O).size(), 2);
    for kind in [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ] {
        assert_eq!(spawn_matrix(kind).size(), 3);
    }
}

#[test]
fn test_spawn_x_centers_each_size() {
    // Arena is 12 wide: 4x4 spawns at 4, 3x3 at 5 (rounded), 2x2 at 5.
    assert_eq!(spawn_x(&spawn_matrix(PieceKind::I)), 4);
    assert_eq!(spawn_x(&spawn_matrix(PieceKind::T)), 5);
    assert_eq!(spawn_x(&spawn_matrix(PieceKind::O)), 5);
}

#[test]
fn test_rotation_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        let original = spawn_matrix(kind);
        let mut matrix = original;
        matrix.rotate(1);
        matrix.rotate(-1);
        assert_eq!(matrix, original, "{kind:?} did not return to spawn");
    }
}

#[test]
fn test_four_cw_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let original = spawn_matrix(kind);
        let mut matrix = original;
        for _ in 0..4 {
            matrix.rotate(1);
        }
        assert_eq!(matrix, original);
    }
}

#[test]
fn test_i_piece_turns_flat() {
    // Spawns as the second column; one clockwise turn lays it across
    // the second row.
    let mut matrix = spawn_matrix(PieceKind::I);
    matrix.rotate(1);

    for x in 0..4 {
        assert_eq!(matrix.get(x, 1), PieceKind::I.cell_value());
    }
    assert_eq!(matrix.occupied_cells().count(), 4);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let original = spawn_matrix(PieceKind::O);
    let mut matrix = original;
    matrix.rotate(1);
    assert_eq!(matrix, original);
    matrix.rotate(-1);
    assert_eq!(matrix, original);
}
