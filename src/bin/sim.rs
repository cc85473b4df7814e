use std::io;

use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Serialize;
use tiny_battleship::console::{Discard, InputSource};
use tiny_battleship::{Game, GameConfig, GameStatus};

/// Answers every prompt with a random on-board number.
struct RandomInput {
    rng: SmallRng,
    size: usize,
}

impl InputSource for RandomInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(Some(self.rng.random_range(1..=self.size).to_string()))
    }
}

/// Play one automated game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for fleet placement and both sides' shots.
    seed: u64,
}

#[derive(Serialize)]
struct Summary {
    winner: &'static str,
    turns: usize,
    player_ships_left: usize,
    enemy_ships_left: usize,
}

fn main() -> anyhow::Result<()> {
    tiny_battleship::init_logging();
    let seed = Cli::parse().seed;
    let config = GameConfig::default();

    let mut input = RandomInput {
        rng: SmallRng::seed_from_u64(seed.wrapping_add(1)),
        size: config.size,
    };
    let mut game = Game::new(config, SmallRng::seed_from_u64(seed))?;
    let status = game.run(&mut input, &mut Discard)?;

    let summary = Summary {
        winner: match status {
            GameStatus::Won => "player",
            _ => "computer",
        },
        turns: game.turns(),
        player_ships_left: game.player_board().ships_remaining(),
        enemy_ships_left: game.enemy_board().ships_remaining(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
