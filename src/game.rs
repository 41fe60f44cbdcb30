//! The match aggregate: two players, phase, turn counters and history.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::{ShotResult, TransitionError};
use crate::config::{AiDifficulty, GameMode, GridSize, MatchConfig, SplitOrientation};
use crate::coordinate::Coordinate;
use crate::placement::PlacementValidator;
use crate::player::{Player, PlayerId, PowerUpAction};
use crate::ship::Ship;

/// Caller-assigned match identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchId(pub u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match-{}", self.0)
    }
}

/// Lifecycle of a match. `CoinFlip` only occurs in ranked mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Placement,
    CoinFlip,
    InProgress,
    Finished,
}

/// One player's move: an optional power-up followed by exactly one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub power_up: Option<PowerUpAction>,
    pub target: Coordinate,
}

impl TurnAction {
    /// Plain shot with no power-up.
    pub const fn fire(target: Coordinate) -> Self {
        Self {
            power_up: None,
            target,
        }
    }

    pub const fn with_power_up(mut self, power_up: PowerUpAction) -> Self {
        self.power_up = Some(power_up);
        self
    }
}

/// What a power-up revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerUpResult {
    pub action: PowerUpAction,
    /// Any ship in the affected area.
    pub detected: bool,
    /// Sonar only: affected cells that hold a ship. Always empty for row scans.
    pub revealed: Vec<Coordinate>,
}

/// Append-only history entry for one resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    pub power_up_result: Option<PowerUpResult>,
    pub shot_coordinate: Coordinate,
    pub shot_result: ShotResult,
    pub player_id: PlayerId,
    pub turn_number: u32,
}

/// Complete, serializable state of one match.
///
/// Identity and configuration are fixed at construction. Everything else
/// changes only through [`TurnEngine`](crate::TurnEngine) and the placement
/// helpers below.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    id: MatchId,
    mode: GameMode,
    ai_difficulty: Option<AiDifficulty>,
    grid_size: GridSize,
    pub(crate) player1: Player,
    pub(crate) player2: Player,
    pub(crate) phase: GamePhase,
    pub(crate) current_player_index: usize,
    pub(crate) turn_number: u32,
    pub(crate) first_player_index: Option<usize>,
    ranked_split_orientation: Option<SplitOrientation>,
    pub(crate) turn_history: Vec<TurnResult>,
    pub(crate) winner: Option<PlayerId>,
}

impl GameState {
    /// New match in the placement phase. Player two is a computer opponent
    /// when `config.ai_difficulty` is set.
    pub fn new(id: MatchId, config: MatchConfig, player1: PlayerId, player2: PlayerId) -> Self {
        let MatchConfig {
            mode, grid_size, ..
        } = config;
        Self {
            id,
            mode,
            ai_difficulty: config.ai_difficulty,
            grid_size,
            player1: Player::new(player1, true, mode, grid_size),
            player2: Player::new(player2, config.ai_difficulty.is_none(), mode, grid_size),
            phase: GamePhase::Placement,
            current_player_index: 0,
            turn_number: 1,
            first_player_index: None,
            ranked_split_orientation: config.effective_split(),
            turn_history: Vec::new(),
            winner: None,
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn ai_difficulty(&self) -> Option<AiDifficulty> {
        self.ai_difficulty
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn first_player_index(&self) -> Option<usize> {
        self.first_player_index
    }

    pub fn ranked_split_orientation(&self) -> Option<SplitOrientation> {
        self.ranked_split_orientation
    }

    pub fn turn_history(&self) -> &[TurnResult] {
        &self.turn_history
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Player in seat `index` (0 or 1).
    ///
    /// # Panics
    ///
    /// Panics if `index > 1`.
    pub fn player(&self, index: usize) -> &Player {
        match index {
            0 => &self.player1,
            1 => &self.player2,
            _ => panic!("player index {} out of range", index),
        }
    }

    pub(crate) fn player_mut(&mut self, index: usize) -> &mut Player {
        match index {
            0 => &mut self.player1,
            1 => &mut self.player2,
            _ => panic!("player index {} out of range", index),
        }
    }

    pub const fn opponent_index(index: usize) -> usize {
        1 - index
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current_player_index)
    }

    /// The seat that won, once the match is finished.
    pub fn winner_player(&self) -> Option<&Player> {
        let winner = self.winner?;
        [&self.player1, &self.player2]
            .into_iter()
            .find(|p| p.id == winner)
    }

    /// Mutable board for seat `index`, available only during placement.
    pub fn placement_board_mut(&mut self, index: usize) -> Option<&mut Board> {
        if self.phase != GamePhase::Placement {
            return None;
        }
        Some(&mut self.player_mut(index).board)
    }

    /// Validates `ships` as a complete fleet and installs it for seat `index`,
    /// replacing any earlier layout.
    pub fn place_fleet(&mut self, index: usize, ships: Vec<Ship>) -> Result<(), TransitionError> {
        if self.phase != GamePhase::Placement {
            return Err(TransitionError::WrongPhase {
                expected: GamePhase::Placement,
                actual: self.phase,
            });
        }
        PlacementValidator::validate(
            &ships,
            self.mode,
            self.ranked_split_orientation,
            self.grid_size,
        )
        .map_err(|error| TransitionError::InvalidFleet {
            player_index: index,
            error,
        })?;
        log::debug!("{}: seat {} placed {} ships", self.id, index, ships.len());
        self.player_mut(index).board.set_ships(ships);
        Ok(())
    }
}
