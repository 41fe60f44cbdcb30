//! Match configuration: grid sizes and their fleets, modes, difficulty tiers
//! and the tuning constants shared by the engine and the AI strategies.

use core::fmt;

use crate::coordinate::Coordinate;

/// Largest board dimension the cell masks can hold.
pub const MAX_DIMENSION: usize = 10;

/// Random (position, orientation) draws per ship before enumerating.
pub const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// Whole-fleet rebuilds before a strategy gives up on a layout.
pub const MAX_FLEET_ATTEMPTS: usize = 32;

/// Profile re-rolls for the hard placement strategy in ranked mode.
pub const MAX_PROFILE_RETRIES: usize = 5;

/// Cells within this many placements of the densest cell are hunt candidates.
pub const DENSITY_WINDOW: u32 = 2;

/// Minimum ship size that counts toward the ranked half constraint.
pub const RANKED_LARGE_SHIP: u8 = 3;

const COMPACT_FLEET: [u8; 7] = [4, 3, 3, 2, 2, 1, 1];
const STANDARD_FLEET: [u8; 9] = [5, 4, 3, 3, 2, 2, 1, 1, 1];

/// Supported board sizes. The fleet composition is fixed by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GridSize {
    /// 8×8 board.
    Compact,
    /// 10×10 board.
    Standard,
}

impl GridSize {
    /// Number of rows (and columns).
    pub const fn dimension(self) -> u8 {
        match self {
            GridSize::Compact => 8,
            GridSize::Standard => 10,
        }
    }

    /// Ship sizes making up the fleet, largest first.
    pub fn fleet_sizes(self) -> &'static [u8] {
        match self {
            GridSize::Compact => &COMPACT_FLEET,
            GridSize::Standard => &STANDARD_FLEET,
        }
    }

    /// Total number of cells on the board.
    pub fn cell_count(self) -> usize {
        let n = self.dimension() as usize;
        n * n
    }

    /// All coordinates in row-major order.
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        let n = self.dimension();
        (0..n).flat_map(move |row| (0..n).map(move |col| Coordinate::new(row, col)))
    }
}

/// Casual matches are forgiving; ranked ones hide information and add the
/// coin flip and half constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    Casual,
    Ranked,
}

impl GameMode {
    /// Starting (sonar ping, row scan) counts for each player.
    pub const fn power_up_seed(self) -> (u8, u8) {
        match self {
            GameMode::Casual => (2, 2),
            GameMode::Ranked => (1, 1),
        }
    }

    /// Whether a sinking shot tells the attacker how long the ship was.
    pub const fn reveals_sunk_size(self) -> bool {
        matches!(self, GameMode::Casual)
    }
}

/// Computer opponent tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AiDifficulty {
    Easy,
    Medium,
    Hard,
}

/// Axis along which the ranked half constraint splits the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitOrientation {
    /// Rows split into top and bottom.
    Horizontal,
    /// Columns split into left and right.
    Vertical,
}

impl SplitOrientation {
    /// (first, second) halves for this split.
    pub const fn halves(self) -> (BoardHalf, BoardHalf) {
        match self {
            SplitOrientation::Horizontal => (BoardHalf::Top, BoardHalf::Bottom),
            SplitOrientation::Vertical => (BoardHalf::Left, BoardHalf::Right),
        }
    }
}

/// One half of the board under a split orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardHalf {
    Top,
    Bottom,
    Left,
    Right,
}

impl BoardHalf {
    /// Returns `true` if `coord` lies in this half of a `grid` board.
    pub fn contains(self, coord: Coordinate, grid: GridSize) -> bool {
        let mid = grid.dimension() / 2;
        match self {
            BoardHalf::Top => coord.row < mid,
            BoardHalf::Bottom => coord.row >= mid,
            BoardHalf::Left => coord.col < mid,
            BoardHalf::Right => coord.col >= mid,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoardHalf::Top => "top",
            BoardHalf::Bottom => "bottom",
            BoardHalf::Left => "left",
            BoardHalf::Right => "right",
        }
    }
}

impl fmt::Display for BoardHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything fixed about a match at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub mode: GameMode,
    pub grid_size: GridSize,
    /// Set when player two is a computer opponent.
    pub ai_difficulty: Option<AiDifficulty>,
    /// Only honored in ranked mode.
    pub split_orientation: Option<SplitOrientation>,
}

impl MatchConfig {
    /// Casual match between two humans on `grid_size`.
    pub const fn casual(grid_size: GridSize) -> Self {
        Self {
            mode: GameMode::Casual,
            grid_size,
            ai_difficulty: None,
            split_orientation: None,
        }
    }

    /// Ranked match split along `split`.
    pub const fn ranked(grid_size: GridSize, split: SplitOrientation) -> Self {
        Self {
            mode: GameMode::Ranked,
            grid_size,
            ai_difficulty: None,
            split_orientation: Some(split),
        }
    }

    /// Same configuration with a computer opponent in seat two.
    pub const fn against_ai(mut self, difficulty: AiDifficulty) -> Self {
        self.ai_difficulty = Some(difficulty);
        self
    }

    /// The split orientation that actually applies to placement validation.
    pub fn effective_split(&self) -> Option<SplitOrientation> {
        match self.mode {
            GameMode::Ranked => self.split_orientation,
            GameMode::Casual => None,
        }
    }
}
