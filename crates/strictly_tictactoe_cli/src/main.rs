//! tictactoe - command-line front end for the computer opponents.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use strictly_tictactoe::{Board, Difficulty, Player};
use strictly_tictactoe_cli::MatchConfig;
use strictly_tictactoe_cli::cli::{self, Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Suggest {
            board,
            player,
            difficulty,
            seed,
        } => run_suggest(board, player, difficulty, seed),
        Command::Match {
            config,
            x,
            o,
            games,
            seed,
            think_delay_ms,
            json,
        } => {
            let mut settings = match config {
                Some(path) => load_config(path)?,
                None => MatchConfig::default(),
            };
            if let Some(x) = x {
                settings = settings.with_x_difficulty(x);
            }
            if let Some(o) = o {
                settings = settings.with_o_difficulty(o);
            }
            if let Some(games) = games {
                settings = settings.with_games(games);
            }
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            if let Some(millis) = think_delay_ms {
                settings = settings.with_think_delay_ms(millis);
            }
            run_match(settings, json).await
        }
    }
}

fn load_config(path: PathBuf) -> Result<MatchConfig> {
    Ok(MatchConfig::from_file(path)?)
}

/// Prints the engine's move for a single board.
fn run_suggest(
    board: Board,
    player: Player,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("{}", cli::suggest(&board, player, difficulty, &mut rng));
    Ok(())
}

/// Plays the configured games and prints each final board plus the tally.
#[instrument(skip(config))]
async fn run_match(config: MatchConfig, json: bool) -> Result<()> {
    info!(?config, "Starting match");

    let summary = strictly_tictactoe_cli::run_match(&config, |round, game| {
        if !json {
            println!("Game {round}: {:?}\n{}\n", game.status(), game.board().display());
        }
    })
    .await?;

    if json {
        println!("{}", cli::summary_json(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
