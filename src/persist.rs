#![cfg(feature = "std")]
//! Versioned save-game codec for [`GameState`].
//!
//! The engine never touches the filesystem; callers store the bytes however
//! they like.

use std::fmt;
use std::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::bitboard::CellMask;
use crate::game::GameState;

/// Current on-disk format. Bump when any persisted type changes shape.
pub const SAVE_FORMAT_VERSION: u16 = 1;

#[derive(Serialize)]
struct SavedGameRef<'a> {
    version: u16,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct SaveHeader {
    version: u16,
}

#[derive(Deserialize)]
struct SavedGame {
    #[allow(dead_code)]
    version: u16,
    state: GameState,
}

/// Errors returned when encoding or decoding a saved game.
#[derive(Debug)]
pub enum PersistError {
    Codec(bincode::Error),
    UnsupportedVersion { found: u16, supported: u16 },
    /// Decoded cleanly but breaks a model invariant.
    Corrupt(&'static str),
}

impl From<bincode::Error> for PersistError {
    fn from(err: bincode::Error) -> Self {
        PersistError::Codec(err)
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Codec(e) => write!(f, "save codec error: {}", e),
            PersistError::UnsupportedVersion { found, supported } => write!(
                f,
                "save format version {} is not supported (expected {})",
                found, supported
            ),
            PersistError::Corrupt(what) => write!(f, "corrupt save: {}", what),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

/// Encodes `state` behind a version header.
pub fn encode_game(state: &GameState) -> Result<Vec<u8>, PersistError> {
    let bytes = bincode::serialize(&SavedGameRef {
        version: SAVE_FORMAT_VERSION,
        state,
    })?;
    Ok(bytes)
}

/// Decodes a game written by [`encode_game`], rejecting other versions
/// before reading the payload.
pub fn decode_game(bytes: &[u8]) -> Result<GameState, PersistError> {
    let header: SaveHeader = bincode::deserialize(bytes)?;
    if header.version != SAVE_FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: header.version,
            supported: SAVE_FORMAT_VERSION,
        });
    }
    let saved: SavedGame = bincode::deserialize(bytes)?;
    check_restored(&saved.state)?;
    Ok(saved.state)
}

fn check_restored(state: &GameState) -> Result<(), PersistError> {
    for index in 0..2 {
        let board = &state.player(index).board;
        if board.grid() != state.grid_size() {
            return Err(PersistError::Corrupt("board grid differs from match grid"));
        }
        if !board.shots().is_subset(&CellMask::full(board.grid())) {
            return Err(PersistError::Corrupt("shots outside the board"));
        }
        if board.ships().iter().any(|s| !s.is_in_bounds(board.grid())) {
            return Err(PersistError::Corrupt("ship off the board"));
        }
        if board
            .ships()
            .iter()
            .any(|s| s.hit_mask().len() != s.size() as usize)
        {
            return Err(PersistError::Corrupt("ship hit mask length differs from size"));
        }
    }
    if state.current_player_index() > 1 {
        return Err(PersistError::Corrupt("current player index out of range"));
    }
    if state.winner().is_some() != state.is_finished() {
        return Err(PersistError::Corrupt("winner set without finished phase"));
    }
    Ok(())
}
