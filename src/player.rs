//! Players and their power-up resources.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::config::{GameMode, GridSize};
use crate::coordinate::Coordinate;

/// Caller-assigned player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Kinds of power-up a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerUpKind {
    /// Reveals whether any ship lies in a 3×3 area.
    SonarPing,
    /// Reveals whether any ship lies in a row.
    RowScan,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::SonarPing, PowerUpKind::RowScan];
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerUpKind::SonarPing => f.write_str("sonar ping"),
            PowerUpKind::RowScan => f.write_str("row scan"),
        }
    }
}

/// A power-up together with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerUpAction {
    SonarPing { center: Coordinate },
    RowScan { row: u8 },
}

impl PowerUpAction {
    pub fn kind(&self) -> PowerUpKind {
        match self {
            PowerUpAction::SonarPing { .. } => PowerUpKind::SonarPing,
            PowerUpAction::RowScan { .. } => PowerUpKind::RowScan,
        }
    }

    /// Cells inspected by the power-up, clipped to the board.
    pub fn affected_coordinates(&self, grid: GridSize) -> Vec<Coordinate> {
        match *self {
            PowerUpAction::SonarPing { center } => {
                let mut cells = Vec::with_capacity(9);
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        if let Some(c) = center.offset(dr, dc, grid) {
                            cells.push(c);
                        }
                    }
                }
                cells
            }
            PowerUpAction::RowScan { row } => {
                if row >= grid.dimension() {
                    return Vec::new();
                }
                (0..grid.dimension())
                    .map(|col| Coordinate::new(row, col))
                    .collect()
            }
        }
    }
}

/// Per-player power-up counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerUpKit {
    pub sonar_ping_remaining: u8,
    pub row_scan_remaining: u8,
}

impl PowerUpKit {
    /// Kit seeded for `mode`.
    pub fn for_mode(mode: GameMode) -> Self {
        let (sonar, scan) = mode.power_up_seed();
        Self {
            sonar_ping_remaining: sonar,
            row_scan_remaining: scan,
        }
    }

    pub fn remaining(&self, kind: PowerUpKind) -> u8 {
        match kind {
            PowerUpKind::SonarPing => self.sonar_ping_remaining,
            PowerUpKind::RowScan => self.row_scan_remaining,
        }
    }

    pub fn has(&self, kind: PowerUpKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Uses one `kind`. Returns `false` without side effects when none remain.
    pub fn consume(&mut self, kind: PowerUpKind) -> bool {
        let counter = match kind {
            PowerUpKind::SonarPing => &mut self.sonar_ping_remaining,
            PowerUpKind::RowScan => &mut self.row_scan_remaining,
        };
        if *counter == 0 {
            return false;
        }
        *counter -= 1;
        true
    }
}

/// A seat in the match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub is_human: bool,
    pub board: Board,
    pub power_ups: PowerUpKit,
}

impl Player {
    /// Player with an empty `grid` board and a kit seeded for `mode`.
    pub fn new(id: PlayerId, is_human: bool, mode: GameMode, grid: GridSize) -> Self {
        Self {
            id,
            is_human,
            board: Board::new(grid),
            power_ups: PowerUpKit::for_mode(mode),
        }
    }

    /// All ships sunk. Always `false` before any ship is placed.
    pub fn has_lost(&self) -> bool {
        self.board.is_all_sunk()
    }
}
