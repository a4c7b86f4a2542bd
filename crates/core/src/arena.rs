//! Arena module - the playfield grid, collision tests, merge, and sweep
//!
//! A 12x20 grid of cell values (0 empty, 1-7 occupied) in a flat row-major
//! array for cache locality and zero allocation. Coordinates: x runs 0..11
//! left to right, y runs 0..19 top to bottom. Pieces spawn centered at y = 0.

use arrayvec::ArrayVec;
use brickdrop_types::{ARENA_HEIGHT, ARENA_WIDTH};

use crate::matrix::ShapeMatrix;

/// Total number of cells in the arena.
const ARENA_SIZE: usize = (ARENA_WIDTH as usize) * (ARENA_HEIGHT as usize);

/// The playfield: 12 columns x 20 rows of cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [u8; ARENA_SIZE],
}

impl Arena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            cells: [0; ARENA_SIZE],
        }
    }

    /// Flat index for (x, y), or `None` when out of bounds.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= ARENA_WIDTH as i8 || y < 0 || y >= ARENA_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (ARENA_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        ARENA_WIDTH
    }

    pub fn height(&self) -> u8 {
        ARENA_HEIGHT
    }

    /// Cell value at (x, y); `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell value. Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, value: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Whether every cell of a row is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ARENA_HEIGHT as usize {
            return false;
        }
        let start = y * ARENA_WIDTH as usize;
        let end = start + ARENA_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Test a matrix at (x, y) against the arena.
    ///
    /// A non-zero matrix cell collides when it maps to a column outside the
    /// arena, a row at or below the floor, or an occupied cell. Rows above
    /// the top (y < 0) never collide; spawning happens at y = 0 and pieces
    /// only descend, so those rows are unreachable in play.
    pub fn collides(&self, matrix: &ShapeMatrix, x: i8, y: i8) -> bool {
        for (cx, cy, _) in matrix.occupied_cells() {
            let fx = x + cx as i8;
            let fy = y + cy as i8;
            if fy < 0 {
                continue;
            }
            if fx < 0 || fx >= ARENA_WIDTH as i8 || fy >= ARENA_HEIGHT as i8 {
                return true;
            }
            if self.cells[(fy as usize) * (ARENA_WIDTH as usize) + (fx as usize)] != 0 {
                return true;
            }
        }
        false
    }

    /// Copy every occupied matrix cell into the arena at (x, y).
    ///
    /// Called exactly once per lock, at a position `collides` rejected for
    /// nothing. Cells that would land out of bounds are skipped.
    pub fn merge(&mut self, matrix: &ShapeMatrix, x: i8, y: i8) {
        for (cx, cy, value) in matrix.occupied_cells() {
            self.set(x + cx as i8, y + cy as i8, value);
        }
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Scans bottom-up, skipping row 0: a removed row is replaced by a fresh
    /// empty row at the top, and the same index is re-examined since it now
    /// holds what sat above it. Returns the cleared row indices in discovery
    /// order (bottom-most first). A single lock completes at most four rows.
    pub fn sweep(&mut self) -> ArrayVec<u8, 4> {
        let mut cleared = ArrayVec::new();
        let width = ARENA_WIDTH as usize;
        let mut y = ARENA_HEIGHT as usize - 1;

        while y > 0 {
            if self.is_row_full(y) {
                // Shift rows [0, y) down one and zero the new top row.
                self.cells.copy_within(0..y * width, width);
                for cell in &mut self.cells[..width] {
                    *cell = 0;
                }
                cleared.push(y as u8);
                // Re-examine the same index.
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = 0;
        }
    }

    /// The flat cell array, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Count of non-empty cells (test convenience).
    #[cfg(test)]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Fill a whole row with one value (test convenience).
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8, value: u8) {
        for x in 0..ARENA_WIDTH as i8 {
            self.set(x, y, value);
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::spawn_matrix;
    use brickdrop_types::PieceKind;

    #[test]
    fn test_index_calculation() {
        assert_eq!(Arena::index(0, 0), Some(0));
        assert_eq!(Arena::index(11, 0), Some(11));
        assert_eq!(Arena::index(0, 1), Some(12));
        assert_eq!(Arena::index(11, 19), Some(239));
        assert_eq!(Arena::index(-1, 0), None);
        assert_eq!(Arena::index(12, 0), None);
        assert_eq!(Arena::index(0, 20), None);
    }

    #[test]
    fn test_new_arena_is_empty() {
        let arena = Arena::new();
        for y in 0..20 {
            for x in 0..12 {
                assert_eq!(arena.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_get_set_bounds() {
        let mut arena = Arena::new();
        assert!(arena.set(5, 10, 3));
        assert_eq!(arena.get(5, 10), Some(3));
        assert!(!arena.set(-1, 0, 1));
        assert!(!arena.set(12, 0, 1));
        assert_eq!(arena.get(0, 20), None);
    }

    #[test]
    fn test_collides_empty_arena() {
        let arena = Arena::new();
        let m = spawn_matrix(PieceKind::O);
        assert!(!arena.collides(&m, 5, 0));
        assert!(!arena.collides(&m, 0, 0));
        assert!(!arena.collides(&m, 10, 18));
    }

    #[test]
    fn test_collides_horizontal_bounds() {
        let arena = Arena::new();
        let m = spawn_matrix(PieceKind::O);
        assert!(arena.collides(&m, -1, 0));
        assert!(arena.collides(&m, 11, 0));
    }

    #[test]
    fn test_collides_floor() {
        let arena = Arena::new();
        let m = spawn_matrix(PieceKind::O);
        // O is 2 tall; y = 18 rests on the floor, y = 19 pokes through it.
        assert!(!arena.collides(&m, 5, 18));
        assert!(arena.collides(&m, 5, 19));
    }

    #[test]
    fn test_collides_occupied_cell() {
        let mut arena = Arena::new();
        let m = spawn_matrix(PieceKind::O);
        arena.set(5, 1, 7);
        assert!(arena.collides(&m, 5, 0));
        assert!(!arena.collides(&m, 7, 0));
    }

    #[test]
    fn test_rows_above_top_do_not_collide() {
        let arena = Arena::new();
        let m = spawn_matrix(PieceKind::O);
        // Both rows above the arena: nothing to hit.
        assert!(!arena.collides(&m, 5, -2));
        // One row above, one inside on an empty arena.
        assert!(!arena.collides(&m, 5, -1));
    }

    #[test]
    fn test_collides_ignores_empty_matrix_cells() {
        let mut arena = Arena::new();
        // T occupies (1,0), (0,1), (1,1), (2,1); corner (0,0) is empty.
        arena.set(5, 0, 7);
        let m = spawn_matrix(PieceKind::T);
        assert!(!arena.collides(&m, 5, 0));
    }

    #[test]
    fn test_merge_writes_piece_values() {
        let mut arena = Arena::new();
        let m = spawn_matrix(PieceKind::O);
        arena.merge(&m, 5, 18);
        assert_eq!(arena.get(5, 18), Some(2));
        assert_eq!(arena.get(6, 18), Some(2));
        assert_eq!(arena.get(5, 19), Some(2));
        assert_eq!(arena.get(6, 19), Some(2));
        assert_eq!(arena.occupied_count(), 4);
    }

    #[test]
    fn test_merge_leaves_other_cells_alone() {
        let mut arena = Arena::new();
        arena.set(0, 19, 7);
        let m = spawn_matrix(PieceKind::O);
        arena.merge(&m, 5, 18);
        assert_eq!(arena.get(0, 19), Some(7));
        assert_eq!(arena.occupied_count(), 5);
    }

    #[test]
    fn test_sweep_single_row() {
        let mut arena = Arena::new();
        arena.fill_row(19, 5);
        arena.set(0, 18, 3);

        let cleared = arena.sweep();
        assert_eq!(cleared.as_slice(), &[19]);

        // The marker above dropped into the cleared row.
        assert_eq!(arena.get(0, 19), Some(3));
        assert_eq!(arena.get(0, 18), Some(0));
        assert_eq!(arena.occupied_count(), 1);
    }

    #[test]
    fn test_sweep_adjacent_rows_reexamines_index() {
        let mut arena = Arena::new();
        arena.fill_row(18, 5);
        arena.fill_row(19, 5);

        let cleared = arena.sweep();
        assert_eq!(cleared.len(), 2);
        assert_eq!(cleared.as_slice(), &[19, 19]);
        assert_eq!(arena.occupied_count(), 0);
    }

    #[test]
    fn test_sweep_separated_rows() {
        let mut arena = Arena::new();
        arena.fill_row(15, 1);
        arena.fill_row(19, 2);
        arena.set(0, 14, 6); // above the upper full row
        arena.set(1, 17, 4); // between the full rows

        let cleared = arena.sweep();
        assert_eq!(cleared.len(), 2);

        // Marker above both full rows drops two; the one between drops one.
        assert_eq!(arena.get(0, 16), Some(6));
        assert_eq!(arena.get(1, 18), Some(4));
        assert_eq!(arena.occupied_count(), 2);
    }

    #[test]
    fn test_sweep_leaves_partial_rows() {
        let mut arena = Arena::new();
        arena.fill_row(19, 5);
        arena.set(0, 19, 0); // one gap
        assert!(arena.sweep().is_empty());
        assert_eq!(arena.occupied_count(), 11);
    }

    #[test]
    fn test_sweep_never_removes_top_row() {
        let mut arena = Arena::new();
        arena.fill_row(0, 5);
        assert!(arena.sweep().is_empty());
        assert!(arena.is_row_full(0));
    }

    #[test]
    fn test_sweep_conserves_cells_not_in_full_rows() {
        let mut arena = Arena::new();
        arena.fill_row(19, 5);
        arena.set(3, 10, 1);
        arena.set(4, 12, 2);

        let before = arena.occupied_count() - 12;
        arena.sweep();
        assert_eq!(arena.occupied_count(), before);
        // No full row remains.
        for y in 1..20 {
            assert!(!arena.is_row_full(y));
        }
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut arena = Arena::new();
        arena.fill_row(19, 5);
        arena.set(3, 3, 1);
        arena.clear();
        assert_eq!(arena.occupied_count(), 0);
    }
}
