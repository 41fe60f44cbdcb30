//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiDifficulty, AiPlacementFactory, AiTargetingFactory, Coordinate, GameMode, GamePhase,
    GameState, GridSize, MatchConfig, MatchId, PlacementStrategy, PlacementValidator, PlayerId,
    PowerUpAction, ShotResult, SplitOrientation, TargetingStrategy, TurnAction, TurnEngine,
};

#[cfg(feature = "std")]
pub use crate::{decode_game, encode_game, init_logging};
