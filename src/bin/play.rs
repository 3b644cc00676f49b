use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::{AgentKind, AppConfig};
use connect_four::game::{GameOutcome, Player};

/// Play one game of Connect Four on stdin/stdout.
#[derive(Parser)]
#[command(name = "play", about = "Play a headless game of Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Who plays Red: human, random or placeholder
    #[arg(long, value_enum)]
    red: Option<AgentKind>,

    /// Who plays Yellow: human, random or placeholder
    #[arg(long, value_enum)]
    yellow: Option<AgentKind>,

    /// Color that moves first: red or yellow
    #[arg(long, value_enum)]
    first: Option<Player>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(red) = cli.red {
        app_config.game.red = red;
    }
    if let Some(yellow) = cli.yellow {
        app_config.game.yellow = yellow;
    }
    if let Some(first) = cli.first {
        app_config.game.first = first;
    }
    if cli.seed.is_some() {
        app_config.game.seed = cli.seed;
    }
    app_config.validate()?;

    let mut game = app_config
        .game
        .build_game(io::stdin().lock(), |_| io::stdout())?;
    let outcome = game.play().context("playing game")?;

    print!("{}", game.board());
    match outcome {
        GameOutcome::Winner(player) => println!("{} wins after {} moves", player, game.moves().len()),
        GameOutcome::Draw => println!("Draw after {} moves", game.moves().len()),
    }
    Ok(())
}
