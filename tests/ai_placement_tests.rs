use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::ai::{
    heat_map, HeatAvoidancePlacement, InvertedHeatPlacement, PlacementProfile, RandomPlacement,
};
use salvo::{
    AiDifficulty, AiPlacementFactory, Coordinate, GameMode, GridSize, PlacementStrategy,
    PlacementValidator, Ship, SplitOrientation,
};

const DIFFICULTIES: [AiDifficulty; 3] = [
    AiDifficulty::Easy,
    AiDifficulty::Medium,
    AiDifficulty::Hard,
];
const GRIDS: [GridSize; 2] = [GridSize::Compact, GridSize::Standard];

fn assert_no_touch(ships: &[Ship]) {
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for ca in a.coordinates() {
                for cb in b.coordinates() {
                    assert!(
                        ca.chebyshev_distance(cb) >= 2,
                        "{} and {} touch at {} / {}",
                        a.id(),
                        b.id(),
                        ca,
                        cb
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_tier_places_a_casual_fleet() {
    for difficulty in DIFFICULTIES {
        for grid in GRIDS {
            for seed in 0..8 {
                let mut strategy =
                    AiPlacementFactory::strategy(difficulty, SmallRng::seed_from_u64(seed));
                let ships = strategy
                    .generate_placement(grid.fleet_sizes(), GameMode::Casual, None, grid)
                    .unwrap();
                assert_eq!(
                    PlacementValidator::validate(&ships, GameMode::Casual, None, grid),
                    Ok(())
                );
                assert_no_touch(&ships);
            }
        }
    }
}

#[test]
fn test_every_tier_honours_ranked_halves() {
    for difficulty in DIFFICULTIES {
        for grid in GRIDS {
            for split in [SplitOrientation::Horizontal, SplitOrientation::Vertical] {
                for seed in 0..6 {
                    let mut strategy =
                        AiPlacementFactory::strategy(difficulty, SmallRng::seed_from_u64(seed));
                    let ships = strategy
                        .generate_placement(grid.fleet_sizes(), GameMode::Ranked, Some(split), grid)
                        .unwrap();
                    assert_eq!(
                        PlacementValidator::validate(&ships, GameMode::Ranked, Some(split), grid),
                        Ok(())
                    );
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_layout() {
    let grid = GridSize::Standard;
    let layout = |seed| {
        InvertedHeatPlacement::new(SmallRng::seed_from_u64(seed))
            .generate_placement(grid.fleet_sizes(), GameMode::Casual, None, grid)
            .unwrap()
    };
    assert_eq!(layout(42), layout(42));

    let random = |seed| {
        RandomPlacement::new(SmallRng::seed_from_u64(seed))
            .generate_placement(grid.fleet_sizes(), GameMode::Casual, None, grid)
            .unwrap()
    };
    assert_eq!(random(9), random(9));
}

#[test]
fn test_heat_map_is_hot_in_the_middle() {
    let grid = GridSize::Standard;
    let heat = heat_map(grid);
    let at = |r: usize, c: usize| heat[r * 10 + c];
    assert!(at(4, 4) > at(0, 0));
    assert!(at(4, 4) > at(0, 4));
    // corners carry the extra penalty
    assert!(at(0, 2) > at(0, 0));
    // checkerboard parity is warmer
    assert!(at(4, 4) > at(4, 5));
}

#[test]
fn test_heat_avoidance_prefers_cold_cells() {
    let grid = GridSize::Standard;
    let heat = heat_map(grid);
    let fleet_heat = |ships: &[Ship]| -> f64 {
        ships
            .iter()
            .flat_map(|s| s.coordinates().collect::<Vec<Coordinate>>())
            .map(|c| heat[c.row as usize * 10 + c.col as usize])
            .sum()
    };
    let mut cold = 0.0;
    let mut random = 0.0;
    for seed in 0..10 {
        let ships = HeatAvoidancePlacement::new(SmallRng::seed_from_u64(seed))
            .generate_placement(grid.fleet_sizes(), GameMode::Casual, None, grid)
            .unwrap();
        cold += fleet_heat(&ships);
        let ships = RandomPlacement::new(SmallRng::seed_from_u64(seed))
            .generate_placement(grid.fleet_sizes(), GameMode::Casual, None, grid)
            .unwrap();
        random += fleet_heat(&ships);
    }
    assert!(cold < random, "heat avoidance {} vs random {}", cold, random);
}

#[test]
fn test_each_profile_lays_out_legal_ships() {
    let grid = GridSize::Standard;
    let mut strategy = InvertedHeatPlacement::new(SmallRng::seed_from_u64(5));
    for profile in PlacementProfile::ALL {
        let ships = strategy.layout(profile, grid.fleet_sizes(), None, grid);
        for (i, ship) in ships.iter().enumerate() {
            assert_eq!(PlacementValidator::can_place(ship, &ships[..i], grid), Ok(()));
        }
        assert_eq!(profile.score_map(grid).len(), 100);
    }
}

#[test]
fn test_edge_hugging_scores_edges_higher() {
    let map = PlacementProfile::EdgeHugging.score_map(GridSize::Standard);
    assert!(map[0] > map[44]);
    let center = PlacementProfile::CenterMass.score_map(GridSize::Standard);
    assert!(center[44] > center[0]);
}
