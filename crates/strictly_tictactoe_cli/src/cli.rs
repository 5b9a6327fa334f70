//! Command-line interface for the tic-tac-toe opponents.

use crate::orchestrator::MatchSummary;
use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::PathBuf;
use strictly_tictactoe::{Board, Difficulty, Player, select_move};
use tracing::instrument;

/// Tic-tac-toe computer opponents: ask for a move or run matches
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe move engine with three opponent tiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a board
    Suggest {
        /// Board in row-major notation, e.g. "XX.OO...." ('.', '-' or '_' for empty)
        #[arg(short, long)]
        board: Board,

        /// Side the engine plays (x or o)
        #[arg(short, long)]
        player: Player,

        /// Strategy tier (easy, medium, hard)
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for the random tiers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play computer-vs-computer games and report the tally
    Match {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Tier playing X
        #[arg(long)]
        x: Option<Difficulty>,

        /// Tier playing O
        #[arg(long)]
        o: Option<Difficulty>,

        /// Number of games (at least 1)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,

        /// Seed for both players
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each move, in milliseconds
        #[arg(long)]
        think_delay_ms: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Line printed by `suggest`: `<index> (<label>)`, or `no move available`
/// when the board is full.
#[instrument(skip(board, rng), fields(board = %board.notation()))]
pub fn suggest<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> String {
    match select_move(board, difficulty, player, rng) {
        Some(position) => format!("{} ({})", position.to_index(), position),
        None => "no move available".to_string(),
    }
}

/// Tally printed by `match --json`.
pub fn summary_json(summary: &MatchSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
