//! Shot results and the engine's error taxonomies.

use alloc::vec::Vec;
use core::fmt;

use crate::config::BoardHalf;
use crate::coordinate::Coordinate;
use crate::game::GamePhase;
use crate::player::PowerUpKind;
use crate::ship::ShipId;

/// Raw outcome of [`Board::receive_shot`](crate::Board::receive_shot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotOutcome {
    pub hit: bool,
    /// Ship struck, if any.
    pub ship: Option<ShipId>,
    /// Size of the ship when this shot sank it.
    pub sunk_size: Option<u8>,
}

/// Result of a shot as reported to the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    Miss,
    Hit,
    /// Ship sunk, carrying its size where the mode reveals it.
    Sunk(Option<u8>),
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Reasons a ship or fleet layout is illegal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Some segment of the ship lies off the board.
    OutOfBounds { ship: ShipId },
    /// The ship shares cell `at` with `existing`.
    Overlap {
        ship: ShipId,
        existing: ShipId,
        at: Coordinate,
    },
    /// The ship touches `existing` at `at`, orthogonally or diagonally.
    AdjacentToShip {
        ship: ShipId,
        existing: ShipId,
        at: Coordinate,
    },
    /// The ship's size is not part of the grid's fleet.
    InvalidShipSize { ship: ShipId, size: u8 },
    /// Size multiset differs from the fleet; both lists are largest first.
    FleetIncomplete { expected: Vec<u8>, got: Vec<u8> },
    /// No ship of size three or more touches this half of the board.
    RankedHalfConstraintViolation(BoardHalf),
    DuplicateShipId(ShipId),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { ship } => {
                write!(f, "Ship {} extends beyond the board", ship)
            }
            PlacementError::Overlap { ship, existing, at } => {
                write!(f, "Ship {} overlaps ship {} at {}", ship, existing, at)
            }
            PlacementError::AdjacentToShip { ship, existing, at } => {
                write!(f, "Ship {} touches ship {} at {}", ship, existing, at)
            }
            PlacementError::InvalidShipSize { ship, size } => {
                write!(f, "Ship {} has size {} which is not in the fleet", ship, size)
            }
            PlacementError::FleetIncomplete { expected, got } => {
                write!(f, "Fleet mismatch: expected sizes {:?}, got {:?}", expected, got)
            }
            PlacementError::RankedHalfConstraintViolation(half) => {
                write!(f, "No ship of size 3 or more occupies the {} half", half)
            }
            PlacementError::DuplicateShipId(id) => write!(f, "Duplicate ship id {}", id),
        }
    }
}

/// Reasons a turn is rejected. A rejected turn never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    NotYourTurn { expected: usize, actual: usize },
    GameNotInProgress(GamePhase),
    GameAlreadyOver,
    AlreadyShotHere(Coordinate),
    PowerUpNotAvailable(PowerUpKind),
    /// The ranked coin-flip winner may not use a power-up on turn one.
    PowerUpForbiddenFirstTurn,
    InvalidCoordinate(Coordinate),
    InvalidRow(u8),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotYourTurn { expected, actual } => write!(
                f,
                "Not your turn: player {} to move, got player {}",
                expected, actual
            ),
            TurnError::GameNotInProgress(phase) => {
                write!(f, "Game is not in progress (phase {:?})", phase)
            }
            TurnError::GameAlreadyOver => write!(f, "Game is already over"),
            TurnError::AlreadyShotHere(at) => write!(f, "Already fired at {}", at),
            TurnError::PowerUpNotAvailable(kind) => write!(f, "No {} remaining", kind),
            TurnError::PowerUpForbiddenFirstTurn => {
                write!(f, "Power-ups are not allowed on the first ranked turn")
            }
            TurnError::InvalidCoordinate(at) => write!(f, "Coordinate {} is off the board", at),
            TurnError::InvalidRow(row) => write!(f, "Row {} is off the board", row),
        }
    }
}

/// Reasons a phase transition is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    /// A player's fleet failed validation when placement was closed.
    InvalidFleet {
        player_index: usize,
        error: PlacementError,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?}, game is in {:?}", expected, actual)
            }
            TransitionError::InvalidFleet {
                player_index,
                error,
            } => write!(f, "Player {} fleet is invalid: {}", player_index, error),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
#[cfg(feature = "std")]
impl std::error::Error for TransitionError {}
