//! Shape matrix module - square piece grids and the rotation transform
//!
//! Every piece carries its cells in a small square matrix (2x2 for O, 3x3 for
//! L/J/S/Z/T, 4x4 for I). The matrix rotates in place: a transpose across the
//! main diagonal followed by a per-row reversal (clockwise) or a row-order
//! reversal (counter-clockwise). Backing storage is a fixed 4x4 array, so no
//! allocation happens anywhere in the hot path.

/// Largest matrix side length (the I piece).
pub const MAX_MATRIX_SIZE: usize = 4;

/// A square grid of cell values, 0 for empty.
///
/// Occupied cells all hold the owning piece's value, so the piece color is
/// derivable from any non-zero cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    size: u8,
    cells: [u8; MAX_MATRIX_SIZE * MAX_MATRIX_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from row-major rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use brickdrop_core::ShapeMatrix;
    ///
    /// let m = ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
    /// assert_eq!(m.size(), 3);
    /// assert_eq!(m.get(1, 0), 1);
    /// assert_eq!(m.get(0, 0), 0);
    /// ```
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 1 && N <= MAX_MATRIX_SIZE);
        let mut cells = [0u8; MAX_MATRIX_SIZE * MAX_MATRIX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                cells[y * N + x] = value;
            }
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at (x, y); 0 for coordinates outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        let n = self.size as usize;
        if x >= n || y >= n {
            return 0;
        }
        self.cells[y * n + x]
    }

    /// The piece value, taken from the first occupied cell (0 if empty).
    pub fn value(&self) -> u8 {
        let n = self.size as usize;
        self.cells[..n * n]
            .iter()
            .copied()
            .find(|&v| v != 0)
            .unwrap_or(0)
    }

    /// Iterate occupied cells as (x, y, value).
    pub fn occupied_cells(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        let n = self.size as usize;
        self.cells[..n * n]
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(move |(i, &v)| ((i % n) as u8, (i / n) as u8, v))
    }

    /// Rotate 90° in place: clockwise for `dir > 0`, counter-clockwise
    /// otherwise.
    ///
    /// Transpose, then mirror each row (cw) or flip the row order (ccw).
    /// Four applications of either direction restore the matrix.
    pub fn rotate(&mut self, dir: i8) {
        let n = self.size as usize;

        for y in 0..n {
            for x in 0..y {
                self.cells.swap(y * n + x, x * n + y);
            }
        }

        if dir > 0 {
            for y in 0..n {
                self.cells[y * n..(y + 1) * n].reverse();
            }
        } else {
            for y in 0..n / 2 {
                let mirror = n - 1 - y;
                for x in 0..n {
                    self.cells.swap(y * n + x, mirror * n + x);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShapeMatrix {
        ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]])
    }

    #[test]
    fn test_rotate_cw() {
        let mut m = sample();
        m.rotate(1);
        // T pointing right after one clockwise turn.
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(1, 0), 1);
        assert_eq!(m.get(2, 0), 0);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.get(1, 1), 1);
        assert_eq!(m.get(2, 1), 1);
        assert_eq!(m.get(0, 2), 0);
        assert_eq!(m.get(1, 2), 1);
        assert_eq!(m.get(2, 2), 0);
    }

    #[test]
    fn test_ccw_inverts_cw() {
        let original = sample();
        let mut m = original;
        m.rotate(1);
        m.rotate(-1);
        assert_eq!(m, original);
    }

    #[test]
    fn test_four_rotations_identity() {
        for dir in [1, -1] {
            let original = sample();
            let mut m = original;
            for _ in 0..4 {
                m.rotate(dir);
            }
            assert_eq!(m, original, "dir {} should have order 4", dir);
        }
    }

    #[test]
    fn test_rotation_preserves_cell_count() {
        let mut m = sample();
        let before = m.occupied_cells().count();
        m.rotate(1);
        assert_eq!(m.occupied_cells().count(), before);
    }

    #[test]
    fn test_value_from_any_occupied_cell() {
        let m = sample();
        assert_eq!(m.value(), 1);
        for (_, _, v) in m.occupied_cells() {
            assert_eq!(v, 1);
        }
    }

    #[test]
    fn test_get_out_of_range_is_empty() {
        let m = sample();
        assert_eq!(m.get(3, 0), 0);
        assert_eq!(m.get(0, 3), 0);
    }

    #[test]
    fn test_occupied_cells_coordinates() {
        let m = ShapeMatrix::from_rows([[2, 2], [2, 2]]);
        let cells: Vec<_> = m.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 0, 2), (1, 0, 2), (0, 1, 2), (1, 1, 2)]);
    }
}
