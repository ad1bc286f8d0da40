//! Board module - manages the 4x4 tile grid
//!
//! The board is a 4x4 grid where each cell is empty (`0`) or holds a power of two.
//! Uses a flat array for cache locality and zero allocation; the whole board is `Copy`.
//! Coordinates: (row, col) where both range 0..3, row 0 is the top edge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Direction, Grid, CELL_COUNT, GRID_SIZE};

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of tile values, row-major order (row * GRID_SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from row-major rows.
    pub fn from_rows(rows: Grid) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            board.cells[r * GRID_SIZE..(r + 1) * GRID_SIZE].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Set tile by flat index. Returns false if out of bounds.
    pub fn set_index(&mut self, idx: usize, value: u32) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Flat indices of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Copy the board into a row-major grid.
    pub fn write_grid(&self, out: &mut Grid) {
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * GRID_SIZE..(r + 1) * GRID_SIZE]);
        }
    }

    pub fn rows(&self) -> Grid {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        self.write_grid(&mut out);
        out
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Slide and merge every line towards `direction`.
    ///
    /// Returns the resulting board and the points gained from merges. No tile is
    /// spawned; the board is unchanged when the move is illegal.
    pub fn shift(&self, direction: Direction) -> (Board, u32) {
        let mut out = *self;
        let mut gained = 0u32;

        for line in 0..GRID_SIZE {
            let idx = line_indices(direction, line);
            let mut values = [0u32; GRID_SIZE];
            for (slot, &i) in values.iter_mut().zip(idx.iter()) {
                *slot = self.cells[i];
            }

            let (slid, points) = slide_line(values);
            for (&i, &v) in idx.iter().zip(slid.iter()) {
                out.cells[i] = v;
            }
            gained = gained.saturating_add(points);
        }

        (out, gained)
    }
}

/// Flat indices of one line, ordered from the edge tiles move towards.
fn line_indices(direction: Direction, line: usize) -> [usize; GRID_SIZE] {
    let mut idx = [0usize; GRID_SIZE];
    for (k, slot) in idx.iter_mut().enumerate() {
        let inward = GRID_SIZE - 1 - k;
        *slot = match direction {
            Direction::Left => line * GRID_SIZE + k,
            Direction::Right => line * GRID_SIZE + inward,
            Direction::Up => k * GRID_SIZE + line,
            Direction::Down => inward * GRID_SIZE + line,
        };
    }
    idx
}

/// Slide one line towards index 0.
///
/// Non-zero tiles are compressed in order, then each adjacent equal pair
/// (scanning from index 0) merges into one tile of double value. A tile takes
/// part in at most one merge, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
///
/// Returns the new line and the sum of merged tile values.
///
/// ```
/// use tui_2048_core::board::slide_line;
///
/// assert_eq!(slide_line([2, 2, 4, 4]), ([4, 8, 0, 0], 12));
/// assert_eq!(slide_line([0, 2, 0, 2]), ([4, 0, 0, 0], 4));
/// ```
pub fn slide_line(line: [u32; GRID_SIZE]) -> ([u32; GRID_SIZE], u32) {
    let tiles: ArrayVec<u32, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0u32; GRID_SIZE];
    let mut gained = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < tiles.len() {
        let value = tiles[read];
        if read + 1 < tiles.len() && tiles[read + 1] == value {
            let merged = value.saturating_mul(2);
            out[write] = merged;
            gained = gained.saturating_add(merged);
            read += 2;
        } else {
            out[write] = value;
            read += 1;
        }
        write += 1;
    }

    (out, gained)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(GRID_SIZE).enumerate() {
            if r > 0 {
                f.write_str(" / ")?;
            }
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", v)?;
            }
        }
        Ok(())
    }
}
