use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tiny_battleship::console::{TerminalInput, TerminalOutput};
use tiny_battleship::{init_logging, play, GameConfig};

/// Play Battleship against the computer on a 4x4 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut input = TerminalInput::stdin();
    let mut output = TerminalOutput::stdout();
    let status = play(GameConfig::default(), rng, &mut input, &mut output)?;
    log::info!("game finished: {:?}", status);
    Ok(())
}
