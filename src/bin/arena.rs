use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use negamax_connect_four::ai::{Agent, NegamaxAgent, RandomAgent};
use negamax_connect_four::arena::run_match;
use negamax_connect_four::config::AppConfig;

/// Pit the negamax engine against another agent without a UI.
#[derive(Parser)]
#[command(name = "arena", about = "Run headless Connect Four matches")]
struct Cli {
    /// Opponent: random or negamax
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Number of games; colours alternate every game
    #[arg(long, default_value_t = 20)]
    games: u32,

    /// Path to TOML configuration file (engine search settings)
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the engine's search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Search depth of a negamax opponent
    #[arg(long, default_value_t = 3)]
    opponent_depth: usize,

    /// Seed for a random opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid --depth")?;

    let mut opponent: Box<dyn Agent> = match cli.opponent.as_str() {
        "random" => match cli.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        "negamax" => {
            if cli.opponent_depth == 0 {
                bail!("--opponent-depth must be >= 1");
            }
            Box::new(NegamaxAgent::new(cli.opponent_depth))
        }
        other => bail!("unknown opponent '{}' (expected 'random' or 'negamax')", other),
    };

    let mut engine = NegamaxAgent::with_options(config.search.depth, config.search.options());

    println!(
        "{} (depth {}) vs {} over {} games",
        engine.name(),
        engine.depth(),
        opponent.name(),
        cli.games
    );
    println!("-------------------------------------------");

    let tally = run_match(&mut engine, opponent.as_mut(), cli.games);

    println!(
        "wins: {} | draws: {} | losses: {} | score: {:.1}%",
        tally.wins,
        tally.draws,
        tally.losses,
        tally.score_rate() * 100.0
    );
    Ok(())
}
