//! Placement strategies for the three difficulty tiers.
//!
//! All strategies place ships largest first and finish by running the full
//! [`PlacementValidator::validate`] on their own layout.

use alloc::vec::Vec;

use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use super::{pick, weighted_index, PlacementStrategy};
use crate::common::PlacementError;
use crate::config::{
    BoardHalf, GameMode, GridSize, SplitOrientation, MAX_FLEET_ATTEMPTS, MAX_PROFILE_RETRIES,
    MAX_RANDOM_ATTEMPTS, RANKED_LARGE_SHIP,
};
use crate::coordinate::Coordinate;
use crate::placement::{Placement, PlacementValidator};
use crate::ship::{Orientation, Ship, ShipId};

const CENTER_WEIGHT: f64 = 3.0;
const EDGE_PENALTY: f64 = 1.0;
const CORNER_PENALTY: f64 = 0.5;
const PARITY_HEAT: f64 = 0.75;
const ANTI_PARITY_BIAS: f64 = 0.5;
const SCATTER_WEIGHT: f64 = 0.25;
const HALF_BONUS: f64 = 1.5;

fn sorted_desc(sizes: &[u8]) -> Vec<u8> {
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// Random draws first, then exhaustive enumeration.
fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    size: u8,
    existing: &[Ship],
    grid: GridSize,
) -> Option<Placement> {
    let n = grid.dimension();
    if size > 0 && size <= n {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let orientation = if rng.random::<bool>() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (n - 1, n - size),
                Orientation::Vertical => (n - size, n - 1),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let candidate = Placement::new(origin, orientation);
            let ship = candidate.to_ship(ShipId(0), size);
            if PlacementValidator::can_place(&ship, existing, grid).is_ok() {
                return Some(candidate);
            }
        }
    }
    let all = PlacementValidator::valid_placements(size, existing, grid);
    trace!("random draws exhausted for size {}, {} enumerated", size, all.len());
    pick(rng, &all).copied()
}

/// Unconstrained random layout. Ships that cannot be placed are left out,
/// so the caller's validation reports the shortfall.
fn random_fleet<R: Rng + ?Sized>(rng: &mut R, sizes: &[u8], grid: GridSize) -> Vec<Ship> {
    let mut ships: Vec<Ship> = Vec::with_capacity(sizes.len());
    for (i, size) in sorted_desc(sizes).into_iter().enumerate() {
        if let Some(p) = random_placement(rng, size, &ships, grid) {
            ships.push(p.to_ship(ShipId(i as u32), size));
        }
    }
    ships
}

/// Random layout where the first two large ships are steered into the first
/// and second half respectively.
fn ranked_random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[u8],
    split: SplitOrientation,
    grid: GridSize,
) -> Vec<Ship> {
    let (first, second) = split.halves();
    let mut targets = [first, second].into_iter();
    let mut ships: Vec<Ship> = Vec::with_capacity(sizes.len());
    for (i, size) in sorted_desc(sizes).into_iter().enumerate() {
        let half = if size >= RANKED_LARGE_SHIP {
            targets.next()
        } else {
            None
        };
        let placement = match half {
            Some(half) => {
                let all = PlacementValidator::valid_placements(size, &ships, grid);
                let touching: Vec<Placement> = all
                    .iter()
                    .copied()
                    .filter(|p| touches(*p, size, half, grid))
                    .collect();
                pick(rng, &touching).or_else(|| pick(rng, &all)).copied()
            }
            None => random_placement(rng, size, &ships, grid),
        };
        if let Some(p) = placement {
            ships.push(p.to_ship(ShipId(i as u32), size));
        }
    }
    ships
}

fn touches(p: Placement, size: u8, half: BoardHalf, grid: GridSize) -> bool {
    p.cells(size).into_iter().any(|c| half.contains(c, grid))
}

/// The easy-tier algorithm, shared as the fallback of the other tiers.
fn random_layout<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[u8],
    mode: GameMode,
    split: Option<SplitOrientation>,
    grid: GridSize,
) -> Result<Vec<Ship>, PlacementError> {
    let mut last_err = None;
    for attempt in 0..MAX_FLEET_ATTEMPTS {
        let ships = random_fleet(rng, sizes, grid);
        let mut err = match PlacementValidator::validate(&ships, mode, split, grid) {
            Ok(()) => return Ok(ships),
            Err(e) => e,
        };
        let empty_half = match err {
            PlacementError::RankedHalfConstraintViolation(half) => Some(half),
            _ => None,
        };
        if let (Some(half), Some(split)) = (empty_half, split) {
            debug!("attempt {}: {} half empty, rebuilding constrained", attempt, half);
            let ships = ranked_random_fleet(rng, sizes, split, grid);
            match PlacementValidator::validate(&ships, mode, Some(split), grid) {
                Ok(()) => return Ok(ships),
                Err(e) => err = e,
            }
        }
        debug!("attempt {}: random layout rejected: {}", attempt, err);
        last_err = Some(err);
    }
    Err(last_err.unwrap_or(PlacementError::FleetIncomplete {
        expected: sorted_desc(sizes),
        got: Vec::new(),
    }))
}

/// Keeps the best `1/divisor` of `scored` (at least one), best first.
fn top_fraction(
    mut scored: Vec<(Placement, f64)>,
    divisor: usize,
    lowest: bool,
) -> Vec<(Placement, f64)> {
    scored.sort_by(|a, b| {
        if lowest {
            a.1.total_cmp(&b.1)
        } else {
            b.1.total_cmp(&a.1)
        }
    });
    let keep = scored.len().div_ceil(divisor).max(1);
    scored.truncate(keep);
    scored
}

/// Easy tier: uniformly random legal layout.
pub struct RandomPlacement {
    rng: SmallRng,
}

impl RandomPlacement {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl PlacementStrategy for RandomPlacement {
    fn generate_placement(
        &mut self,
        fleet_sizes: &[u8],
        mode: GameMode,
        split: Option<SplitOrientation>,
        grid: GridSize,
    ) -> Result<Vec<Ship>, PlacementError> {
        random_layout(&mut self.rng, fleet_sizes, mode, split, grid)
    }
}

/// Per-cell estimate of how early a human hunter fires at a cell: hot in the
/// middle and on checkerboard parity, cold along edges and corners.
pub fn heat_map(grid: GridSize) -> Vec<f64> {
    let n = grid.dimension();
    let center = (n as f64 - 1.0) / 2.0;
    let max_dist = libm::sqrt(2.0) * center;
    grid.coordinates()
        .map(|c| {
            let dr = c.row as f64 - center;
            let dc = c.col as f64 - center;
            let dist = libm::sqrt(dr * dr + dc * dc);
            let center_bonus = if max_dist > 0.0 {
                CENTER_WEIGHT * (1.0 - dist / max_dist)
            } else {
                0.0
            };
            let row_edge = c.row == 0 || c.row == n - 1;
            let col_edge = c.col == 0 || c.col == n - 1;
            let mut edge_penalty = 0.0;
            if row_edge || col_edge {
                edge_penalty += EDGE_PENALTY;
            }
            if row_edge && col_edge {
                edge_penalty += CORNER_PENALTY;
            }
            let parity = if (c.row + c.col) % 2 == 0 {
                PARITY_HEAT
            } else {
                0.0
            };
            center_bonus - edge_penalty + parity
        })
        .collect()
}

fn cell_score(map: &[f64], grid: GridSize, c: Coordinate) -> f64 {
    map[c.row as usize * grid.dimension() as usize + c.col as usize]
}

/// Medium tier: hides ships in the coldest cells of [`heat_map`].
pub struct HeatAvoidancePlacement {
    rng: SmallRng,
}

impl HeatAvoidancePlacement {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    fn layout(&mut self, sizes: &[u8], grid: GridSize) -> Vec<Ship> {
        let heat = heat_map(grid);
        let mut ships: Vec<Ship> = Vec::with_capacity(sizes.len());
        for (i, size) in sorted_desc(sizes).into_iter().enumerate() {
            let scored: Vec<(Placement, f64)> =
                PlacementValidator::valid_placements(size, &ships, grid)
                    .into_iter()
                    .map(|p| {
                        let score = p
                            .cells(size)
                            .into_iter()
                            .map(|c| cell_score(&heat, grid, c))
                            .sum();
                        (p, score)
                    })
                    .collect();
            let coldest = top_fraction(scored, 4, true);
            trace!("size {}: {} coldest candidates", size, coldest.len());
            if let Some(&(p, _)) = pick(&mut self.rng, &coldest) {
                ships.push(p.to_ship(ShipId(i as u32), size));
            }
        }
        ships
    }
}

impl PlacementStrategy for HeatAvoidancePlacement {
    fn generate_placement(
        &mut self,
        fleet_sizes: &[u8],
        mode: GameMode,
        split: Option<SplitOrientation>,
        grid: GridSize,
    ) -> Result<Vec<Ship>, PlacementError> {
        let ships = self.layout(fleet_sizes, grid);
        match PlacementValidator::validate(&ships, mode, split, grid) {
            Ok(()) => Ok(ships),
            Err(e) => {
                debug!("heat layout rejected ({}), falling back to random", e);
                random_layout(&mut self.rng, fleet_sizes, mode, split, grid)
            }
        }
    }
}

/// Scoring personalities for the hard tier, one drawn per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementProfile {
    EdgeHugging,
    CenterMass,
    DiagonalBias,
    MaximumScatter,
    HalfBoardBias,
}

impl PlacementProfile {
    pub const ALL: [PlacementProfile; 5] = [
        PlacementProfile::EdgeHugging,
        PlacementProfile::CenterMass,
        PlacementProfile::DiagonalBias,
        PlacementProfile::MaximumScatter,
        PlacementProfile::HalfBoardBias,
    ];

    /// Per-cell preference (higher is better), including the anti-parity
    /// bias shared by every profile.
    pub fn score_map(self, grid: GridSize) -> Vec<f64> {
        let n = grid.dimension() as f64;
        let center = (n - 1.0) / 2.0;
        grid.coordinates()
            .map(|c| {
                let r = c.row as f64;
                let col = c.col as f64;
                let from_center = libm::fabs(r - center) + libm::fabs(col - center);
                let base = match self {
                    PlacementProfile::EdgeHugging => from_center,
                    PlacementProfile::CenterMass => 2.0 * center - from_center,
                    PlacementProfile::DiagonalBias => {
                        let main = libm::fabs(r - col);
                        let anti = libm::fabs(r + col - (n - 1.0));
                        (n - 1.0) - if main < anti { main } else { anti }
                    }
                    PlacementProfile::MaximumScatter | PlacementProfile::HalfBoardBias => 1.0,
                };
                let parity = if (c.row + c.col) % 2 == 1 {
                    ANTI_PARITY_BIAS
                } else {
                    0.0
                };
                base + parity
            })
            .collect()
    }
}

/// Hard tier: a randomly drawn [`PlacementProfile`] per game, weighted draws
/// among the best-scoring placements.
pub struct InvertedHeatPlacement {
    rng: SmallRng,
}

impl InvertedHeatPlacement {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    fn draw_profile(&mut self, excluding: Option<PlacementProfile>) -> PlacementProfile {
        let choices: Vec<PlacementProfile> = PlacementProfile::ALL
            .into_iter()
            .filter(|&p| Some(p) != excluding)
            .collect();
        pick(&mut self.rng, &choices)
            .copied()
            .unwrap_or(PlacementProfile::MaximumScatter)
    }

    /// Lays out a fleet under `profile`.
    pub fn layout(
        &mut self,
        profile: PlacementProfile,
        sizes: &[u8],
        split: Option<SplitOrientation>,
        grid: GridSize,
    ) -> Vec<Ship> {
        let map = profile.score_map(grid);
        let (first, second) = split.unwrap_or(SplitOrientation::Horizontal).halves();
        let mut ships: Vec<Ship> = Vec::with_capacity(sizes.len());
        for (i, size) in sorted_desc(sizes).into_iter().enumerate() {
            let placed: Vec<Coordinate> = ships.iter().flat_map(|s| s.coordinates()).collect();
            let scored: Vec<(Placement, f64)> =
                PlacementValidator::valid_placements(size, &ships, grid)
                    .into_iter()
                    .map(|p| {
                        let cells = p.cells(size);
                        let mean = cells.iter().map(|&c| cell_score(&map, grid, c)).sum::<f64>()
                            / cells.len().max(1) as f64;
                        let bonus = match profile {
                            PlacementProfile::MaximumScatter => {
                                let nearest = cells
                                    .iter()
                                    .flat_map(|c| {
                                        placed.iter().map(move |o| c.manhattan_distance(*o))
                                    })
                                    .min()
                                    .unwrap_or(0);
                                SCATTER_WEIGHT * nearest as f64
                            }
                            PlacementProfile::HalfBoardBias => {
                                let within =
                                    |half: BoardHalf| cells.iter().all(|&c| half.contains(c, grid));
                                if within(first) || within(second) {
                                    HALF_BONUS
                                } else {
                                    0.0
                                }
                            }
                            _ => 0.0,
                        };
                        (p, mean + bonus)
                    })
                    .collect();
            let best = top_fraction(scored, 5, false);
            let floor = best.iter().map(|&(_, s)| s).fold(f64::INFINITY, f64::min);
            let weights: Vec<f64> = best.iter().map(|&(_, s)| s - floor + 0.1).collect();
            trace!("{:?} size {}: drawing from {} candidates", profile, size, best.len());
            if let Some(idx) = weighted_index(&mut self.rng, &weights) {
                ships.push(best[idx].0.to_ship(ShipId(i as u32), size));
            }
        }
        ships
    }
}

impl PlacementStrategy for InvertedHeatPlacement {
    fn generate_placement(
        &mut self,
        fleet_sizes: &[u8],
        mode: GameMode,
        split: Option<SplitOrientation>,
        grid: GridSize,
    ) -> Result<Vec<Ship>, PlacementError> {
        let mut profile = self.draw_profile(None);
        for attempt in 0..=MAX_PROFILE_RETRIES {
            let ships = self.layout(profile, fleet_sizes, split, grid);
            match PlacementValidator::validate(&ships, mode, split, grid) {
                Ok(()) => {
                    debug!("{:?} layout accepted after {} retries", profile, attempt);
                    return Ok(ships);
                }
                Err(e) => {
                    debug!("{:?} layout rejected: {}", profile, e);
                    profile = self.draw_profile(Some(profile));
                }
            }
        }
        warn!(
            "no profile satisfied placement after {} retries, using random layout",
            MAX_PROFILE_RETRIES
        );
        random_layout(&mut self.rng, fleet_sizes, mode, split, grid)
    }
}
