//! Decision engine for the computer opponent.
//!
//! Every call is a pure function of the board snapshot, the difficulty and
//! the acting player. The random tiers draw from a caller-supplied RNG so
//! a seeded generator reproduces the same move.

pub mod easy;
pub mod hard;
pub mod medium;

use super::{Board, Difficulty, Player, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the next move for `player`.
///
/// Returns `None` if and only if the board is full. Otherwise the returned
/// position is always empty on `board`.
#[instrument(skip(board, rng), fields(board = %board.notation()))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    player: Player,
    rng: &mut R,
) -> Option<Position> {
    let choice = match difficulty {
        Difficulty::Easy => easy::pick(board, rng),
        Difficulty::Medium => medium::pick(board, player, rng),
        Difficulty::Hard => hard::pick(board, player),
    };
    debug!(?choice, "Engine chose move");
    choice
}
