#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persist;
mod placement;
mod player;
pub mod prelude;
mod ship;
mod turn;

pub use ai::{AiPlacementFactory, AiTargetingFactory, PlacementStrategy, TargetingStrategy};
pub use bitboard::{BitBoard, BitBoardError, CellMask, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use persist::{decode_game, encode_game, PersistError, SAVE_FORMAT_VERSION};
pub use placement::*;
pub use player::*;
pub use ship::*;
pub use turn::*;
