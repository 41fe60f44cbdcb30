use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use salvo::{
    encode_game, init_logging, AiDifficulty, AiPlacementFactory, AiTargetingFactory, GameMode,
    GamePhase, GameState, GridSize, MatchConfig, MatchId, PlayerId, SplitOrientation,
    TargetingStrategy, TurnAction, TurnEngine,
};

#[derive(Parser)]
#[command(author, version, about = "Run a computer-vs-computer match", long_about = None)]
struct Cli {
    /// Difficulty of the computer in seat one.
    #[arg(long, value_enum, default_value_t = Tier::Medium)]
    p1: Tier,
    /// Difficulty of the computer in seat two.
    #[arg(long, value_enum, default_value_t = Tier::Hard)]
    p2: Tier,
    #[arg(long, value_enum, default_value_t = Mode::Casual)]
    mode: Mode,
    #[arg(long, value_enum, default_value_t = Grid::Standard)]
    grid: Grid,
    /// Half-board split for ranked matches.
    #[arg(long, value_enum, default_value_t = Split::Horizontal)]
    split: Split,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Write the finished match to this file.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print a one-line JSON summary instead of the boards.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Tier {
    Easy,
    Medium,
    Hard,
}

impl From<Tier> for AiDifficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => AiDifficulty::Easy,
            Tier::Medium => AiDifficulty::Medium,
            Tier::Hard => AiDifficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Casual,
    Ranked,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Grid {
    Compact,
    Standard,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Split {
    Horizontal,
    Vertical,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let grid = match cli.grid {
        Grid::Compact => GridSize::Compact,
        Grid::Standard => GridSize::Standard,
    };
    let split = match cli.split {
        Split::Horizontal => SplitOrientation::Horizontal,
        Split::Vertical => SplitOrientation::Vertical,
    };
    let config = match cli.mode {
        Mode::Casual => MatchConfig::casual(grid),
        Mode::Ranked => MatchConfig::ranked(grid, split),
    }
    .against_ai(cli.p2.into());

    let tiers: [AiDifficulty; 2] = [cli.p1.into(), cli.p2.into()];
    let mut state = GameState::new(
        MatchId(cli.seed.unwrap_or_default()),
        config,
        PlayerId(1),
        PlayerId(2),
    );

    for (seat, &tier) in tiers.iter().enumerate() {
        let mut placer = AiPlacementFactory::strategy(tier, SmallRng::from_rng(&mut rng));
        let ships = placer
            .generate_placement(
                grid.fleet_sizes(),
                state.mode(),
                state.ranked_split_orientation(),
                grid,
            )
            .map_err(|e| anyhow!("seat {} placement failed: {}", seat + 1, e))?;
        state.place_fleet(seat, ships).map_err(|e| anyhow!(e))?;
    }

    if TurnEngine::finish_placement(&mut state).map_err(|e| anyhow!(e))? == GamePhase::CoinFlip {
        TurnEngine::perform_coin_flip(&mut state, &mut rng).map_err(|e| anyhow!(e))?;
    }

    let mut targeters: Vec<Box<dyn TargetingStrategy>> = tiers
        .iter()
        .map(|&tier| AiTargetingFactory::strategy(tier, SmallRng::from_rng(&mut rng)))
        .collect();

    // Every shot lands on a fresh cell, so both boards are exhausted by then.
    let max_shots = 2 * grid.cell_count();
    while !state.is_finished() {
        if state.turn_history().len() >= max_shots {
            bail!("no winner after {} shots", max_shots);
        }
        let seat = state.current_player_index();
        let defender = &state.player(GameState::opponent_index(seat)).board;
        let target = targeters[seat].select_target(defender, state.turn_history());
        TurnEngine::process_turn(&TurnAction::fire(target), &mut state, seat)
            .map_err(|e| anyhow!("seat {} fired at {}: {}", seat + 1, target, e))?;
    }

    if let Some(path) = &cli.save {
        let bytes = encode_game(&state)?;
        std::fs::write(path, bytes)?;
    }

    let winner = state
        .winner_player()
        .ok_or_else(|| anyhow!("finished match has no winner"))?;
    let shots_by = |id: PlayerId| {
        state
            .turn_history()
            .iter()
            .filter(|t| t.player_id == id)
            .count()
    };

    if cli.json {
        let result = json!({
            "match": state.id().0,
            "mode": format!("{:?}", state.mode()),
            "grid": format!("{:?}", grid),
            "first_player": state.first_player_index().map(|i| i + 1),
            "turns": state.turn_number(),
            "player1": {
                "difficulty": format!("{:?}", tiers[0]),
                "shots": shots_by(state.player1().id),
            },
            "player2": {
                "difficulty": format!("{:?}", tiers[1]),
                "shots": shots_by(state.player2().id),
            },
            "winner": winner.id.to_string(),
        });
        println!("{}", serde_json::to_string(&result)?);
    } else {
        for seat in 0..2 {
            let player = state.player(seat);
            println!("{} ({:?}) waters:", player.id, tiers[seat]);
            println!("{}\n", player.board);
        }
        println!(
            "{} wins on turn {} after {} shots ({} match)",
            winner.id,
            state.turn_number(),
            shots_by(winner.id),
            match state.mode() {
                GameMode::Casual => "casual",
                GameMode::Ranked => "ranked",
            }
        );
    }
    Ok(())
}
