//! Grid positions and neighbourhood queries.

use alloc::vec::Vec;
use core::fmt;

use crate::config::GridSize;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A cell on the board, zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the cell lies on a `grid` board.
    pub fn is_valid(self, grid: GridSize) -> bool {
        self.row < grid.dimension() && self.col < grid.dimension()
    }

    /// Cell shifted by (`dr`, `dc`), if it stays on the board.
    pub fn offset(self, dr: i8, dc: i8, grid: GridSize) -> Option<Coordinate> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let n = grid.dimension() as i16;
        if row < 0 || col < 0 || row >= n || col >= n {
            return None;
        }
        Some(Coordinate::new(row as u8, col as u8))
    }

    /// Up, down, left and right neighbours that exist on the board.
    pub fn orthogonal_neighbors(self, grid: GridSize) -> Vec<Coordinate> {
        self.neighbors_by(&ORTHOGONAL, grid)
    }

    /// Corner-touching neighbours that exist on the board.
    pub fn diagonal_neighbors(self, grid: GridSize) -> Vec<Coordinate> {
        self.neighbors_by(&DIAGONAL, grid)
    }

    /// The full 8-cell halo, clipped to the board.
    pub fn all_neighbors(self, grid: GridSize) -> Vec<Coordinate> {
        let mut out = self.orthogonal_neighbors(grid);
        out.extend(self.diagonal_neighbors(grid));
        out
    }

    fn neighbors_by(self, deltas: &[(i8, i8)], grid: GridSize) -> Vec<Coordinate> {
        deltas
            .iter()
            .filter_map(|&(dr, dc)| self.offset(dr, dc, grid))
            .collect()
    }

    pub fn manhattan_distance(self, other: Coordinate) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// King-move distance; two cells touch iff this is at most 1.
    pub fn chebyshev_distance(self, other: Coordinate) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// Column letter followed by the 1-based row, e.g. `C4`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            write!(f, "{}{}", (b'A' + self.col) as char, self.row as u16 + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
