//! Piece catalog module - canonical rotation-0 shapes
//!
//! Maps each [`PieceKind`] to its spawn matrix. Layout and cell values:
//!
//! | Piece | Size | Value |
//! |-------|------|-------|
//! | T | 3x3 | 1 |
//! | O | 2x2 | 2 |
//! | L | 3x3 | 3 |
//! | J | 3x3 | 4 |
//! | I | 4x4 | 5 |
//! | S | 3x3 | 6 |
//! | Z | 3x3 | 7 |
//!
//! The I piece spawns vertical (a full column of its 4x4 box); L and J carry
//! their foot in the bottom row. A fresh matrix is created per spawn and
//! rotated in place during play.

use brickdrop_types::{PieceKind, ARENA_WIDTH};

use crate::matrix::ShapeMatrix;

/// The rotation-0 matrix for a piece kind.
pub fn spawn_matrix(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows([
            [0, 5, 0, 0],
            [0, 5, 0, 0],
            [0, 5, 0, 0],
            [0, 5, 0, 0],
        ]),
        PieceKind::L => ShapeMatrix::from_rows([[0, 3, 0], [0, 3, 0], [0, 3, 3]]),
        PieceKind::J => ShapeMatrix::from_rows([[0, 4, 0], [0, 4, 0], [4, 4, 0]]),
        PieceKind::O => ShapeMatrix::from_rows([[2, 2], [2, 2]]),
        PieceKind::Z => ShapeMatrix::from_rows([[7, 7, 0], [0, 7, 7], [0, 0, 0]]),
        PieceKind::S => ShapeMatrix::from_rows([[0, 6, 6], [6, 6, 0], [0, 0, 0]]),
        PieceKind::T => ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
    }
}

/// Spawn column for a matrix: horizontally centered on the arena.
pub fn spawn_x(matrix: &ShapeMatrix) -> i8 {
    (ARENA_WIDTH as i8) / 2 - (matrix.size() as i8) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            let m = spawn_matrix(kind);
            assert_eq!(
                m.occupied_cells().count(),
                4,
                "{:?} should occupy 4 cells",
                kind
            );
        }
    }

    #[test]
    fn test_matrix_value_matches_kind() {
        for kind in PieceKind::ALL {
            let m = spawn_matrix(kind);
            assert_eq!(m.value(), kind.cell_value());
            for (_, _, v) in m.occupied_cells() {
                assert_eq!(v, kind.cell_value());
            }
        }
    }

    #[test]
    fn test_matrix_sizes() {
        assert_eq!(spawn_matrix(PieceKind::I).size(), 4);
        assert_eq!(spawn_matrix(PieceKind::O).size(), 2);
        for kind in [
            PieceKind::L,
            PieceKind::J,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
        ] {
            assert_eq!(spawn_matrix(kind).size(), 3);
        }
    }

    #[test]
    fn test_spawn_x_centers_each_size() {
        // 12-wide arena: 4x4 spawns at 4, 3x3 at 5, 2x2 at 5.
        assert_eq!(spawn_x(&spawn_matrix(PieceKind::I)), 4);
        assert_eq!(spawn_x(&spawn_matrix(PieceKind::T)), 5);
        assert_eq!(spawn_x(&spawn_matrix(PieceKind::O)), 5);
    }

    #[test]
    fn test_i_piece_spawns_vertical() {
        let m = spawn_matrix(PieceKind::I);
        for y in 0..4 {
            assert_eq!(m.get(1, y), 5);
        }
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(2, 0), 0);
    }
}
