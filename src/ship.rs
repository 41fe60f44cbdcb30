//! Ships: size, origin, orientation and per-segment hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellMask;
use crate::config::{BoardHalf, GridSize};
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Caller-assigned ship identifier, unique within a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ship placed on the board. `hit_mask[i]` tracks the `i`-th segment
/// counted from the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    size: u8,
    origin: Coordinate,
    orientation: Orientation,
    hit_mask: Vec<bool>,
}

impl Ship {
    /// Ship with no segments hit. Bounds are not checked here; see
    /// [`PlacementValidator::can_place`](crate::PlacementValidator::can_place).
    pub fn new(id: ShipId, size: u8, origin: Coordinate, orientation: Orientation) -> Self {
        Self::with_hit_mask(id, size, origin, orientation, alloc::vec![false; size as usize])
    }

    /// Restores a ship with an existing hit mask.
    ///
    /// # Panics
    ///
    /// Panics if `hit_mask.len() != size`.
    pub fn with_hit_mask(
        id: ShipId,
        size: u8,
        origin: Coordinate,
        orientation: Orientation,
        hit_mask: Vec<bool>,
    ) -> Self {
        assert_eq!(
            hit_mask.len(),
            size as usize,
            "hit mask length must equal ship size"
        );
        Ship {
            id,
            size,
            origin,
            orientation,
            hit_mask,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_mask(&self) -> &[bool] {
        &self.hit_mask
    }

    /// Segment `i` counted from the origin. Saturates instead of wrapping so
    /// that oversized placements stay out of bounds.
    fn segment(&self, i: u8) -> Coordinate {
        match self.orientation {
            Orientation::Horizontal => {
                Coordinate::new(self.origin.row, self.origin.col.saturating_add(i))
            }
            Orientation::Vertical => {
                Coordinate::new(self.origin.row.saturating_add(i), self.origin.col)
            }
        }
    }

    /// Occupied cells from the origin outward.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.size).map(move |i| self.segment(i))
    }

    fn segment_index(&self, coord: Coordinate) -> Option<usize> {
        let (along, across, origin_along, origin_across) = match self.orientation {
            Orientation::Horizontal => (coord.col, coord.row, self.origin.col, self.origin.row),
            Orientation::Vertical => (coord.row, coord.col, self.origin.row, self.origin.col),
        };
        if across != origin_across || along < origin_along {
            return None;
        }
        let offset = along - origin_along;
        (offset < self.size).then_some(offset as usize)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.segment_index(coord).is_some()
    }

    /// Occupied cells as a mask.
    pub fn occupancy(&self) -> CellMask {
        self.coordinates().collect()
    }

    /// Cells touching the ship (8-directional), excluding the ship itself.
    pub fn halo(&self, grid: GridSize) -> CellMask {
        self.occupancy().halo(grid)
    }

    /// Returns `true` if every occupied cell is on a `grid` board.
    pub fn is_in_bounds(&self, grid: GridSize) -> bool {
        self.coordinates().all(|c| c.is_valid(grid))
    }

    /// Number of occupied cells in `half`.
    pub fn cells_in(&self, half: BoardHalf, grid: GridSize) -> usize {
        self.coordinates().filter(|&c| half.contains(c, grid)).count()
    }

    /// Marks the segment at `coord` as hit. Returns `true` only when a new
    /// hit was recorded; repeats and misses are no-ops.
    pub fn record_hit(&mut self, coord: Coordinate) -> bool {
        match self.segment_index(coord) {
            Some(i) if !self.hit_mask[i] => {
                self.hit_mask[i] = true;
                true
            }
            _ => false,
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hit_mask.iter().filter(|&&h| h).count()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_mask.iter().all(|&h| h)
    }
}
