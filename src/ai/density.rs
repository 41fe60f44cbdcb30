//! Ship-placement density over the unshot cells of an opponent board.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitboard::CellMask;
use crate::board::Board;
use crate::config::DENSITY_WINDOW;
use crate::coordinate::Coordinate;
use crate::ship::Orientation;

/// For every afloat ship size and both orientations, count the placements
/// that avoid known misses and sunk ships, crediting each unshot cell they
/// cover. Indexed row-major by `row * dimension + col`.
pub fn placement_density(board: &Board) -> Vec<u32> {
    let grid = board.grid();
    let n = grid.dimension() as usize;
    let mut density = vec![0u32; n * n];

    let sunk = board
        .sunk_ships()
        .fold(CellMask::new(), |acc, ship| acc | ship.occupancy());
    let blocked = board.misses() | sunk;
    let unshot = board.unshot();

    for len in board.remaining_ship_sizes() {
        let len = len as usize;
        if len == 0 || len > n {
            continue;
        }
        for orient in Orientation::BOTH {
            let (max_row, max_col) = match orient {
                Orientation::Horizontal => (n, n - len + 1),
                Orientation::Vertical => (n - len + 1, n),
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    let cell = |k: usize| match orient {
                        Orientation::Horizontal => Coordinate::new(r as u8, (c + k) as u8),
                        Orientation::Vertical => Coordinate::new((r + k) as u8, c as u8),
                    };
                    if (0..len).any(|k| blocked.contains(cell(k))) {
                        continue;
                    }
                    for k in 0..len {
                        let coord = cell(k);
                        if unshot.contains(coord) {
                            density[coord.row as usize * n + coord.col as usize] += 1;
                        }
                    }
                }
            }
        }
    }
    density
}

/// Unshot cells whose density is within [`DENSITY_WINDOW`] of the maximum.
/// Empty when no placement fits anywhere.
pub fn densest_cells(board: &Board) -> Vec<Coordinate> {
    let density = placement_density(board);
    let n = board.grid().dimension() as usize;
    let max = density.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    let floor = max.saturating_sub(DENSITY_WINDOW);
    board
        .unshot()
        .iter()
        .filter(|c| {
            let d = density[c.row as usize * n + c.col as usize];
            d > 0 && d >= floor
        })
        .collect()
}
