//! Turn validation and execution, phase transitions and win detection.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::common::{ShotResult, TransitionError, TurnError};
use crate::config::GameMode;
use crate::coordinate::Coordinate;
use crate::game::{GamePhase, GameState, PowerUpResult, TurnAction, TurnResult};
use crate::placement::PlacementValidator;
use crate::player::{PowerUpAction, PowerUpKind};

/// Stateless rule engine operating on a [`GameState`].
///
/// All checks run before any mutation, so a rejected turn leaves the state
/// untouched.
pub struct TurnEngine;

impl TurnEngine {
    /// Closes the placement phase once both fleets are valid. Casual matches
    /// start immediately with seat 0; ranked matches move to the coin flip.
    pub fn finish_placement(state: &mut GameState) -> Result<GamePhase, TransitionError> {
        expect_phase(state, GamePhase::Placement)?;
        for index in 0..2 {
            PlacementValidator::validate(
                state.player(index).board.ships(),
                state.mode(),
                state.ranked_split_orientation(),
                state.grid_size(),
            )
            .map_err(|error| TransitionError::InvalidFleet {
                player_index: index,
                error,
            })?;
        }
        state.phase = match state.mode() {
            GameMode::Casual => {
                state.current_player_index = 0;
                GamePhase::InProgress
            }
            GameMode::Ranked => GamePhase::CoinFlip,
        };
        debug!("{}: placement finished, now {:?}", state.id(), state.phase);
        Ok(state.phase)
    }

    /// Picks the first mover uniformly at random and starts the match.
    pub fn perform_coin_flip<R: Rng + ?Sized>(
        state: &mut GameState,
        rng: &mut R,
    ) -> Result<usize, TransitionError> {
        expect_phase(state, GamePhase::CoinFlip)?;
        let first = if rng.random::<bool>() { 0 } else { 1 };
        state.first_player_index = Some(first);
        state.current_player_index = first;
        state.phase = GamePhase::InProgress;
        debug!("{}: coin flip won by seat {}", state.id(), first);
        Ok(first)
    }

    /// Checks whether seat `player_index` may play `action` now.
    pub fn validate_turn(
        action: &TurnAction,
        state: &GameState,
        player_index: usize,
    ) -> Result<(), TurnError> {
        match state.phase() {
            GamePhase::Finished => return Err(TurnError::GameAlreadyOver),
            GamePhase::InProgress => {}
            other => return Err(TurnError::GameNotInProgress(other)),
        }
        if player_index != state.current_player_index() {
            return Err(TurnError::NotYourTurn {
                expected: state.current_player_index(),
                actual: player_index,
            });
        }

        let grid = state.grid_size();
        if let Some(power_up) = action.power_up {
            if Self::is_ranked_opening(state, player_index) {
                return Err(TurnError::PowerUpForbiddenFirstTurn);
            }
            let kind = power_up.kind();
            if !state.player(player_index).power_ups.has(kind) {
                return Err(TurnError::PowerUpNotAvailable(kind));
            }
            match power_up {
                PowerUpAction::SonarPing { center } if !center.is_valid(grid) => {
                    return Err(TurnError::InvalidCoordinate(center));
                }
                PowerUpAction::RowScan { row } if row >= grid.dimension() => {
                    return Err(TurnError::InvalidRow(row));
                }
                _ => {}
            }
        }

        if !action.target.is_valid(grid) {
            return Err(TurnError::InvalidCoordinate(action.target));
        }
        let defender = &state.player(GameState::opponent_index(player_index)).board;
        if defender.has_been_shot(action.target) {
            return Err(TurnError::AlreadyShotHere(action.target));
        }
        Ok(())
    }

    /// Validates and applies one turn for seat `player_index`.
    ///
    /// The turn always passes to the opponent afterwards, hit or miss.
    pub fn process_turn(
        action: &TurnAction,
        state: &mut GameState,
        player_index: usize,
    ) -> Result<TurnResult, TurnError> {
        Self::validate_turn(action, state, player_index)?;

        let grid = state.grid_size();
        let mode = state.mode();
        let turn_number = state.turn_number;
        let defender_index = GameState::opponent_index(player_index);

        let power_up_result = action.power_up.map(|power_up| {
            state
                .player_mut(player_index)
                .power_ups
                .consume(power_up.kind());
            let affected = power_up.affected_coordinates(grid);
            let board = &state.player(defender_index).board;
            let detected = board.has_ship_in_any(&affected);
            let revealed = match power_up {
                PowerUpAction::SonarPing { .. } => board.occupied_among(&affected),
                PowerUpAction::RowScan { .. } => Vec::new(),
            };
            PowerUpResult {
                action: power_up,
                detected,
                revealed,
            }
        });

        let outcome = state
            .player_mut(defender_index)
            .board
            .receive_shot(action.target);
        let shot_result = match (outcome.hit, outcome.sunk_size) {
            (false, _) => ShotResult::Miss,
            (true, None) => ShotResult::Hit,
            (true, Some(size)) => {
                ShotResult::Sunk(mode.reveals_sunk_size().then_some(size))
            }
        };

        let attacker_id = state.player(player_index).id;
        let result = TurnResult {
            power_up_result,
            shot_coordinate: action.target,
            shot_result,
            player_id: attacker_id,
            turn_number,
        };
        state.turn_history.push(result.clone());
        debug!(
            "{}: turn {} {} fired at {} -> {:?}",
            state.id(),
            turn_number,
            attacker_id,
            action.target,
            shot_result
        );

        if state.player(defender_index).has_lost() {
            state.winner = Some(attacker_id);
            state.phase = GamePhase::Finished;
            debug!("{}: {} wins on turn {}", state.id(), attacker_id, turn_number);
        } else {
            state.current_player_index = defender_index;
            if state.current_player_index == 0 {
                state.turn_number += 1;
            }
        }
        Ok(result)
    }

    /// True on ranked turn one for the coin-flip winner.
    fn is_ranked_opening(state: &GameState, player_index: usize) -> bool {
        state.mode() == GameMode::Ranked
            && state.first_player_index() == Some(player_index)
            && state.turn_number() == 1
    }

    /// Returns `true` if seat `player_index` could attach `kind` to its next
    /// turn, ignoring the target.
    pub fn can_use_power_up(state: &GameState, player_index: usize, kind: PowerUpKind) -> bool {
        state.phase() == GamePhase::InProgress
            && state.current_player_index() == player_index
            && !Self::is_ranked_opening(state, player_index)
            && state.player(player_index).power_ups.has(kind)
    }

    /// Power-ups seat `player_index` could use right now.
    pub fn available_power_ups(state: &GameState, player_index: usize) -> Vec<PowerUpKind> {
        PowerUpKind::ALL
            .into_iter()
            .filter(|&kind| Self::can_use_power_up(state, player_index, kind))
            .collect()
    }

    /// Opponent cells seat `player_index` has not yet fired at.
    pub fn valid_shot_coordinates(state: &GameState, player_index: usize) -> Vec<Coordinate> {
        state
            .player(GameState::opponent_index(player_index))
            .board
            .unshot()
            .iter()
            .collect()
    }
}

fn expect_phase(state: &GameState, expected: GamePhase) -> Result<(), TransitionError> {
    if state.phase() != expected {
        return Err(TransitionError::WrongPhase {
            expected,
            actual: state.phase(),
        });
    }
    Ok(())
}
