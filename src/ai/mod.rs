//! Computer opponent: fleet placement and shot selection.
//!
//! Every strategy owns its random source, injected at construction, so a
//! seeded [`SmallRng`] reproduces a whole game.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::{AiDifficulty, GameMode, GridSize, SplitOrientation};
use crate::coordinate::Coordinate;
use crate::game::TurnResult;
use crate::ship::Ship;

pub mod density;
pub mod placement;
pub mod targeting;

pub use density::{densest_cells, placement_density};
pub use placement::{
    heat_map, HeatAvoidancePlacement, InvertedHeatPlacement, PlacementProfile, RandomPlacement,
};
pub use targeting::{connected_components, HuntTargetStrategy, RandomTargeting};

/// Produces a complete fleet layout.
pub trait PlacementStrategy: Send {
    /// Lays out ships of `fleet_sizes` on a `grid` board. The result passes
    /// [`PlacementValidator::validate`](crate::PlacementValidator::validate)
    /// for `mode` and `split`; otherwise the last validation error is
    /// returned.
    fn generate_placement(
        &mut self,
        fleet_sizes: &[u8],
        mode: GameMode,
        split: Option<SplitOrientation>,
        grid: GridSize,
    ) -> Result<Vec<Ship>, PlacementError>;
}

/// Chooses the next shot.
pub trait TargetingStrategy: Send {
    /// Picks an unshot cell on the opponent's `board`. Returns `A1` only when
    /// every cell has been shot.
    fn select_target(&mut self, board: &Board, previous_results: &[TurnResult]) -> Coordinate;
}

/// Maps a difficulty to its placement strategy.
pub struct AiPlacementFactory;

impl AiPlacementFactory {
    pub fn strategy(difficulty: AiDifficulty, rng: SmallRng) -> Box<dyn PlacementStrategy> {
        match difficulty {
            AiDifficulty::Easy => Box::new(RandomPlacement::new(rng)),
            AiDifficulty::Medium => Box::new(HeatAvoidancePlacement::new(rng)),
            AiDifficulty::Hard => Box::new(InvertedHeatPlacement::new(rng)),
        }
    }
}

/// Maps a difficulty to its targeting strategy.
pub struct AiTargetingFactory;

impl AiTargetingFactory {
    pub fn strategy(difficulty: AiDifficulty, rng: SmallRng) -> Box<dyn TargetingStrategy> {
        match difficulty {
            AiDifficulty::Easy => Box::new(RandomTargeting::new(rng)),
            AiDifficulty::Medium => Box::new(HuntTargetStrategy::new(rng, 0.75, false)),
            AiDifficulty::Hard => Box::new(HuntTargetStrategy::new(rng, 0.95, true)),
        }
    }
}

/// Uniform choice from a slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}

/// Index drawn with probability proportional to `weights`. Falls back to a
/// uniform draw when the weights sum to zero.
pub(crate) fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().map(|&w| if w > 0.0 { w } else { 0.0 }).sum();
    if total <= 0.0 {
        return Some(rng.random_range(0..weights.len()));
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            cumulative += w;
            if threshold < cumulative {
                return Some(i);
            }
        }
    }
    Some(weights.len() - 1)
}
