use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use salvo::ai::RandomPlacement;
use salvo::{Board, Coordinate, GameMode, GridSize, PlacementStrategy};

fn random_board(seed: u64, grid: GridSize) -> Board {
    let mut strategy = RandomPlacement::new(SmallRng::seed_from_u64(seed));
    let ships = strategy
        .generate_placement(grid.fleet_sizes(), GameMode::Casual, None, grid)
        .unwrap();
    let mut board = Board::new(grid);
    board.set_ships(ships);
    board
}

fn grid_strategy() -> impl Strategy<Value = GridSize> {
    prop_oneof![Just(GridSize::Compact), Just(GridSize::Standard)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch(seed in any::<u64>(), grid in grid_strategy()) {
        let board = random_board(seed, grid);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.coordinates() {
                    for cb in b.coordinates() {
                        prop_assert!(ca.chebyshev_distance(cb) >= 2);
                    }
                }
            }
        }
        let cells: usize = grid.fleet_sizes().iter().map(|&s| s as usize).sum();
        prop_assert_eq!(board.occupancy().count(), cells);
    }

    #[test]
    fn hit_masks_track_shots(seed in any::<u64>(), grid in grid_strategy()) {
        let mut board = random_board(seed, grid);
        let mut rng = SmallRng::seed_from_u64(seed);
        let n = grid.dimension();
        for _ in 0..rng.random_range(0..grid.cell_count()) {
            let c = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            if !board.has_been_shot(c) {
                board.receive_shot(c);
            }
        }
        for ship in board.ships() {
            prop_assert_eq!(ship.hit_mask().len(), ship.size() as usize);
            let shot = ship.coordinates().filter(|&c| board.has_been_shot(c)).count();
            prop_assert_eq!(ship.hit_count(), shot);
            prop_assert_eq!(ship.is_sunk(), ship.hit_mask().iter().all(|&h| h));
        }
        prop_assert_eq!(board.hits().count() + board.misses().count(), board.shots().count());
        prop_assert_eq!(board.is_all_sunk(), board.ships().iter().all(|s| s.is_sunk()));
    }

    #[test]
    fn sinking_everything_ends_with_all_sunk(seed in any::<u64>(), grid in grid_strategy()) {
        let mut board = random_board(seed, grid);
        let cells: Vec<Coordinate> = board.occupancy().iter().collect();
        let mut sunk = 0;
        for c in cells {
            prop_assert!(!board.is_all_sunk());
            if board.receive_shot(c).sunk_size.is_some() {
                sunk += 1;
            }
        }
        prop_assert!(board.is_all_sunk());
        prop_assert_eq!(sunk, grid.fleet_sizes().len());
        prop_assert!(board.remaining_ship_sizes().is_empty());
    }
}
