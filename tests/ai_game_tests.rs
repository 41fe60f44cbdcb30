use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::prelude::*;
use salvo::{Coordinate, ShotResult};

fn play(config: MatchConfig, tiers: [AiDifficulty; 2], seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let grid = config.grid_size;
    let mut state = GameState::new(MatchId(seed), config, PlayerId(1), PlayerId(2));
    for (seat, &tier) in tiers.iter().enumerate() {
        let rng = SmallRng::seed_from_u64(seed * 3 + seat as u64);
        let mut placer = AiPlacementFactory::strategy(tier, rng);
        let ships = placer
            .generate_placement(
                grid.fleet_sizes(),
                state.mode(),
                state.ranked_split_orientation(),
                grid,
            )
            .unwrap();
        state.place_fleet(seat, ships).unwrap();
    }
    if TurnEngine::finish_placement(&mut state).unwrap() == GamePhase::CoinFlip {
        TurnEngine::perform_coin_flip(&mut state, &mut rng).unwrap();
    }

    let mut hunters: Vec<Box<dyn TargetingStrategy>> = tiers
        .iter()
        .enumerate()
        .map(|(seat, &tier)| {
            AiTargetingFactory::strategy(tier, SmallRng::seed_from_u64(seed * 7 + seat as u64))
        })
        .collect();

    let mut turns = 0;
    while !state.is_finished() {
        turns += 1;
        if turns > 2 * grid.cell_count() {
            panic!("game took too many turns");
        }
        let seat = state.current_player_index();
        let target = hunters[seat].select_target(
            &state.player(GameState::opponent_index(seat)).board,
            state.turn_history(),
        );
        TurnEngine::process_turn(&TurnAction::fire(target), &mut state, seat).unwrap();
    }
    state
}

fn check_finished(state: &GameState) {
    assert_eq!(state.phase(), GamePhase::Finished);
    let winner = state.winner_player().expect("winner");
    let loser = state.player(if winner.id == state.player1().id { 1 } else { 0 });
    assert!(loser.has_lost());
    assert!(!winner.has_lost());

    let mut seen: [HashSet<Coordinate>; 2] = [HashSet::new(), HashSet::new()];
    let mut last_turn = 1;
    for entry in state.turn_history() {
        let seat = if entry.player_id == state.player1().id { 0 } else { 1 };
        assert!(seen[seat].insert(entry.shot_coordinate), "repeated shot");
        assert!(entry.turn_number >= last_turn);
        last_turn = entry.turn_number;
        if let ShotResult::Sunk(size) = entry.shot_result {
            assert_eq!(size.is_some(), state.mode() == GameMode::Casual);
        }
    }
    assert_eq!(state.turn_history().last().map(|t| t.player_id), Some(winner.id));
}

#[test]
fn test_ai_vs_ai_casual() {
    let tiers = [AiDifficulty::Easy, AiDifficulty::Medium, AiDifficulty::Hard];
    for (i, &a) in tiers.iter().enumerate() {
        for &b in &tiers {
            let config = MatchConfig::casual(GridSize::Standard).against_ai(b);
            let state = play(config, [a, b], 100 + i as u64);
            check_finished(&state);
        }
    }
}

#[test]
fn test_ai_vs_ai_ranked() {
    for seed in 0..4 {
        for split in [SplitOrientation::Horizontal, SplitOrientation::Vertical] {
            let config =
                MatchConfig::ranked(GridSize::Compact, split).against_ai(AiDifficulty::Hard);
            let state = play(config, [AiDifficulty::Medium, AiDifficulty::Hard], seed);
            check_finished(&state);
            assert!(state.first_player_index().is_some());
        }
    }
}

#[test]
fn test_same_seed_same_match() {
    let config = MatchConfig::casual(GridSize::Compact).against_ai(AiDifficulty::Hard);
    let a = play(config, [AiDifficulty::Hard, AiDifficulty::Hard], 9);
    let b = play(config, [AiDifficulty::Hard, AiDifficulty::Hard], 9);
    assert_eq!(a, b);
}

#[test]
fn test_player_two_is_computer_when_difficulty_set() {
    let config = MatchConfig::casual(GridSize::Standard).against_ai(AiDifficulty::Easy);
    let state = GameState::new(MatchId(1), config, PlayerId(1), PlayerId(2));
    assert!(state.player1().is_human);
    assert!(!state.player2().is_human);
    let pvp = GameState::new(
        MatchId(2),
        MatchConfig::casual(GridSize::Standard),
        PlayerId(1),
        PlayerId(2),
    );
    assert!(pvp.player2().is_human);
    assert_eq!(pvp.ai_difficulty(), None);
}
