//! Game board: placed ships plus the shots received, with derived
//! hit/miss/sunk queries.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellMask;
use crate::common::ShotOutcome;
use crate::config::GridSize;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// One player's waters.
///
/// The no-touch invariant between ships is enforced by
/// [`PlacementValidator`](crate::PlacementValidator), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    grid: GridSize,
    ships: Vec<Ship>,
    incoming_shots: CellMask,
}

impl Board {
    /// Create an empty board (no ships placed, no shots).
    pub fn new(grid: GridSize) -> Self {
        Board {
            grid,
            ships: Vec::new(),
            incoming_shots: CellMask::new(),
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Appends a ship without validation.
    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Replaces the whole fleet, e.g. with a strategy's layout.
    pub fn set_ships(&mut self, ships: Vec<Ship>) {
        self.ships = ships;
    }

    pub fn clear_ships(&mut self) {
        self.ships.clear();
    }

    /// Every cell shot at so far.
    pub fn shots(&self) -> CellMask {
        self.incoming_shots
    }

    pub fn has_been_shot(&self, coord: Coordinate) -> bool {
        self.incoming_shots.contains(coord)
    }

    /// Union of all ship cells.
    pub fn occupancy(&self) -> CellMask {
        self.ships
            .iter()
            .fold(CellMask::new(), |acc, ship| acc | ship.occupancy())
    }

    /// Shots that struck a ship.
    pub fn hits(&self) -> CellMask {
        self.incoming_shots & self.occupancy()
    }

    /// Shots that landed in open water.
    pub fn misses(&self) -> CellMask {
        self.incoming_shots & !self.occupancy()
    }

    /// Cells on the board not yet shot at.
    pub fn unshot(&self) -> CellMask {
        CellMask::full(self.grid) & !self.incoming_shots
    }

    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.ship_at(coord).is_some()
    }

    /// Returns `true` if any of `coords` holds a ship.
    pub fn has_ship_in_any(&self, coords: &[Coordinate]) -> bool {
        coords.iter().any(|&c| self.is_occupied(c))
    }

    /// The subset of `coords` that holds a ship, in input order.
    pub fn occupied_among(&self, coords: &[Coordinate]) -> Vec<Coordinate> {
        coords
            .iter()
            .copied()
            .filter(|&c| self.is_occupied(c))
            .collect()
    }

    /// Returns `true` when at least one ship exists and every ship is sunk.
    pub fn is_all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    pub fn sunk_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| s.is_sunk())
    }

    /// Sizes of ships still afloat, largest first.
    pub fn remaining_ship_sizes(&self) -> Vec<u8> {
        let mut sizes: Vec<u8> = self
            .ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(Ship::size)
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Records a shot at `coord` and reports what it struck.
    ///
    /// Callers must check [`has_been_shot`](Self::has_been_shot) first; a
    /// repeated shot is recorded again as a plain hit or miss.
    pub fn receive_shot(&mut self, coord: Coordinate) -> ShotOutcome {
        self.incoming_shots.insert(coord);
        match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                let newly_hit = ship.record_hit(coord);
                ShotOutcome {
                    hit: true,
                    ship: Some(ship.id()),
                    sunk_size: (newly_hit && ship.is_sunk()).then(|| ship.size()),
                }
            }
            None => ShotOutcome {
                hit: false,
                ship: None,
                sunk_size: None,
            },
        }
    }
}

/// Renders the board with ships revealed: `#` ship, `X` hit, `o` miss.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.grid.dimension();
        write!(f, "   ")?;
        for c in 0..n {
            write!(f, " {}", (b'A' + c) as char)?;
        }
        writeln!(f)?;
        for r in 0..n {
            write!(f, "{:2} ", r + 1)?;
            for c in 0..n {
                let coord = Coordinate::new(r, c);
                let ch = match (self.is_occupied(coord), self.has_been_shot(coord)) {
                    (true, true) => 'X',
                    (true, false) => '#',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, " {}", ch)?;
            }
            if r + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
