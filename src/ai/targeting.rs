//! Shot selection: uniform random, and hunt/target with optional
//! probability-density hunting.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use super::{densest_cells, pick, TargetingStrategy};
use crate::bitboard::CellMask;
use crate::board::Board;
use crate::config::GridSize;
use crate::coordinate::Coordinate;
use crate::game::TurnResult;

/// Easy tier: any unshot cell, uniformly.
pub struct RandomTargeting {
    rng: SmallRng,
}

impl RandomTargeting {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl TargetingStrategy for RandomTargeting {
    fn select_target(&mut self, board: &Board, _previous_results: &[TurnResult]) -> Coordinate {
        let unshot: Vec<Coordinate> = board.unshot().iter().collect();
        pick(&mut self.rng, &unshot)
            .copied()
            .unwrap_or(Coordinate::new(0, 0))
    }
}

/// Medium and hard tiers.
///
/// Holds no memory between calls: the state is recomputed from the board
/// each time. While any hit belongs to a ship still afloat the strategy is in
/// target mode and never abandons it; `accuracy` only decides between line
/// following and guessing around a random hit. Otherwise it hunts, using
/// parity or placement density with probability `accuracy`.
pub struct HuntTargetStrategy {
    rng: SmallRng,
    accuracy: f64,
    use_probability_density: bool,
}

impl HuntTargetStrategy {
    /// `accuracy` is clamped to `[0, 1]`.
    pub fn new(rng: SmallRng, accuracy: f64, use_probability_density: bool) -> Self {
        let accuracy = if accuracy.is_nan() {
            0.0
        } else {
            accuracy.clamp(0.0, 1.0)
        };
        Self {
            rng,
            accuracy,
            use_probability_density,
        }
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Shot cells holding a ship that is not yet sunk.
    pub fn active_hits(board: &Board) -> Vec<Coordinate> {
        board
            .hits()
            .iter()
            .filter(|&c| board.ship_at(c).is_some_and(|s| !s.is_sunk()))
            .collect()
    }

    fn target(&mut self, board: &Board, active: &[Coordinate]) -> Option<Coordinate> {
        if self.rng.random_bool(self.accuracy) {
            if let Some(next) = self.follow_lines(board, active) {
                trace!("target mode: following line to {}", next);
                return Some(next);
            }
        }
        self.around_random_hit(board, active)
    }

    /// Fills a gap between hits in one row or column, else extends a line of
    /// touching hits past an end.
    fn follow_lines(&mut self, board: &Board, active: &[Coordinate]) -> Option<Coordinate> {
        let gaps = gap_cells(board, active);
        if let Some(&gap) = pick(&mut self.rng, &gaps) {
            return Some(gap);
        }

        let grid = board.grid();
        for component in connected_components(active, grid) {
            if component.len() < 2 {
                continue;
            }
            let horizontal = component.iter().all(|c| c.row == component[0].row);
            let vertical = component.iter().all(|c| c.col == component[0].col);
            if !horizontal && !vertical {
                continue;
            }
            let along = |c: &Coordinate| if horizontal { c.col } else { c.row };
            let at = |i: u8| {
                if horizontal {
                    Coordinate::new(component[0].row, i)
                } else {
                    Coordinate::new(i, component[0].col)
                }
            };
            let lo = component.iter().map(along).min().unwrap_or(0);
            let hi = component.iter().map(along).max().unwrap_or(0);
            let mut ends = Vec::with_capacity(2);
            if lo > 0 {
                ends.push(at(lo - 1));
            }
            ends.push(at(hi.saturating_add(1)));
            ends.retain(|&c| c.is_valid(grid) && !board.has_been_shot(c));
            if let Some(&end) = pick(&mut self.rng, &ends) {
                return Some(end);
            }
        }
        None
    }

    /// An unshot orthogonal neighbour of a randomly chosen active hit.
    fn around_random_hit(&mut self, board: &Board, active: &[Coordinate]) -> Option<Coordinate> {
        if active.is_empty() {
            return None;
        }
        let start = self.rng.random_range(0..active.len());
        for i in 0..active.len() {
            let hit = active[(start + i) % active.len()];
            let open: Vec<Coordinate> = hit
                .orthogonal_neighbors(board.grid())
                .into_iter()
                .filter(|&c| !board.has_been_shot(c))
                .collect();
            if let Some(&next) = pick(&mut self.rng, &open) {
                return Some(next);
            }
        }
        None
    }

    fn hunt(&mut self, board: &Board) -> Coordinate {
        let unshot = board.unshot();
        if self.rng.random_bool(self.accuracy) {
            let candidates: Vec<Coordinate> = if self.use_probability_density {
                densest_cells(board)
            } else {
                unshot.iter().filter(|c| (c.row + c.col) % 2 == 0).collect()
            };
            if let Some(&cell) = pick(&mut self.rng, &candidates) {
                trace!("hunt mode: {} of {} candidates", cell, candidates.len());
                return cell;
            }
        }
        let all: Vec<Coordinate> = unshot.iter().collect();
        pick(&mut self.rng, &all)
            .copied()
            .unwrap_or(Coordinate::new(0, 0))
    }
}

impl TargetingStrategy for HuntTargetStrategy {
    fn select_target(&mut self, board: &Board, _previous_results: &[TurnResult]) -> Coordinate {
        let active = Self::active_hits(board);
        if !active.is_empty() {
            if let Some(next) = self.target(board, &active) {
                return next;
            }
        }
        self.hunt(board)
    }
}

/// Cells lying strictly between two hits of the same row or column where
/// every cell in between is still unshot.
fn gap_cells(board: &Board, active: &[Coordinate]) -> Vec<Coordinate> {
    let mut gaps = CellMask::new();
    for (i, &a) in active.iter().enumerate() {
        for &b in &active[i + 1..] {
            let between: Vec<Coordinate> = if a.row == b.row {
                let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
                (lo + 1..hi).map(|col| Coordinate::new(a.row, col)).collect()
            } else if a.col == b.col {
                let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
                (lo + 1..hi).map(|row| Coordinate::new(row, a.col)).collect()
            } else {
                continue;
            };
            if !between.is_empty() && between.iter().all(|&c| !board.has_been_shot(c)) {
                for c in between {
                    gaps.insert(c);
                }
            }
        }
    }
    gaps.iter().collect()
}

/// Groups cells into orthogonally connected components, each in discovery
/// order.
pub fn connected_components(cells: &[Coordinate], grid: GridSize) -> Vec<Vec<Coordinate>> {
    let members: CellMask = cells.iter().copied().collect();
    let mut seen = CellMask::new();
    let mut components = Vec::new();
    for &start in cells {
        if !seen.insert(start) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            component.push(cell);
            for n in cell.orthogonal_neighbors(grid) {
                if members.contains(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        components.push(component);
    }
    components
}
