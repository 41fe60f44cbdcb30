//! Placement legality: bounds, overlap, the no-touch rule, fleet composition
//! and the ranked half constraint.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::bitboard::CellMask;
use crate::board::Board;
use crate::common::PlacementError;
use crate::config::{GameMode, GridSize, SplitOrientation, RANKED_LARGE_SHIP};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship, ShipId};

/// Id used for hypothetical ships during enumeration.
const SCRATCH_ID: ShipId = ShipId(u32::MAX);

/// An origin and orientation, not yet bound to a ship id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub origin: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }

    pub fn to_ship(self, id: ShipId, size: u8) -> Ship {
        Ship::new(id, size, self.origin, self.orientation)
    }

    /// Cells this placement would occupy for a ship of `size`.
    pub fn cells(self, size: u8) -> Vec<Coordinate> {
        self.to_ship(SCRATCH_ID, size).coordinates().collect()
    }
}

/// Stateless placement rules.
pub struct PlacementValidator;

impl PlacementValidator {
    /// Checks one ship against already placed ships.
    pub fn can_place(ship: &Ship, existing: &[Ship], grid: GridSize) -> Result<(), PlacementError> {
        if !ship.is_in_bounds(grid) {
            return Err(PlacementError::OutOfBounds { ship: ship.id() });
        }
        let cells = ship.occupancy();
        for other in existing {
            if let Some(at) = (cells & other.occupancy()).first() {
                return Err(PlacementError::Overlap {
                    ship: ship.id(),
                    existing: other.id(),
                    at,
                });
            }
        }
        let halo = cells.halo(grid);
        for other in existing {
            let touching = (cells & other.halo(grid)).first().or_else(|| {
                // Other direction: an existing cell inside our halo.
                (halo & other.occupancy()).first()
            });
            if let Some(at) = touching {
                return Err(PlacementError::AdjacentToShip {
                    ship: ship.id(),
                    existing: other.id(),
                    at,
                });
            }
        }
        Ok(())
    }

    /// Validates a complete fleet for `mode` on a `grid` board.
    ///
    /// Each ship is checked only against the ships listed before it; the
    /// outcome does not depend on order because the pairwise rules are
    /// symmetric.
    pub fn validate(
        ships: &[Ship],
        mode: GameMode,
        split: Option<SplitOrientation>,
        grid: GridSize,
    ) -> Result<(), PlacementError> {
        let mut seen = BTreeSet::new();
        for ship in ships {
            if !seen.insert(ship.id()) {
                return Err(PlacementError::DuplicateShipId(ship.id()));
            }
        }

        let fleet = grid.fleet_sizes();
        if let Some(bad) = ships.iter().find(|s| !fleet.contains(&s.size())) {
            return Err(PlacementError::InvalidShipSize {
                ship: bad.id(),
                size: bad.size(),
            });
        }

        let mut got: Vec<u8> = ships.iter().map(Ship::size).collect();
        got.sort_unstable_by(|a, b| b.cmp(a));
        if got.as_slice() != fleet {
            return Err(PlacementError::FleetIncomplete {
                expected: fleet.to_vec(),
                got,
            });
        }

        for (i, ship) in ships.iter().enumerate() {
            Self::can_place(ship, &ships[..i], grid)?;
        }

        if mode == GameMode::Ranked {
            if let Some(split) = split {
                Self::check_ranked_halves(ships, split, grid)?;
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate) applied to the fleet on `board`.
    pub fn validate_board(
        board: &Board,
        mode: GameMode,
        split: Option<SplitOrientation>,
    ) -> Result<(), PlacementError> {
        Self::validate(board.ships(), mode, split, board.grid())
    }

    /// Every ship of size three or more counts toward each half it touches.
    pub fn check_ranked_halves(
        ships: &[Ship],
        split: SplitOrientation,
        grid: GridSize,
    ) -> Result<(), PlacementError> {
        let (first, second) = split.halves();
        for half in [first, second] {
            let covered = ships
                .iter()
                .filter(|s| s.size() >= RANKED_LARGE_SHIP)
                .any(|s| s.cells_in(half, grid) > 0);
            if !covered {
                return Err(PlacementError::RankedHalfConstraintViolation(half));
            }
        }
        Ok(())
    }

    /// Cells no new ship may occupy: existing ships plus their halos.
    pub fn blocked_cells(existing: &[Ship], grid: GridSize) -> CellMask {
        existing.iter().fold(CellMask::new(), |acc, ship| {
            let cells = ship.occupancy();
            acc | cells | cells.halo(grid)
        })
    }

    /// Every legal origin and orientation for a ship of `size`, in row-major
    /// order with horizontal before vertical.
    pub fn valid_placements(size: u8, existing: &[Ship], grid: GridSize) -> Vec<Placement> {
        let blocked = Self::blocked_cells(existing, grid);
        let mut out = Vec::new();
        for origin in grid.coordinates() {
            for orientation in Orientation::BOTH {
                let candidate = Ship::new(SCRATCH_ID, size, origin, orientation);
                if candidate.is_in_bounds(grid) && !candidate.occupancy().intersects(&blocked) {
                    out.push(Placement::new(origin, orientation));
                }
            }
        }
        out
    }

    /// Returns `true` if `coord` is neither occupied nor touching a ship.
    pub fn is_safe_coordinate(coord: Coordinate, existing: &[Ship], grid: GridSize) -> bool {
        coord.is_valid(grid) && !Self::blocked_cells(existing, grid).contains(coord)
    }
}
