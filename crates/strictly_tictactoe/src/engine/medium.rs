//! Medium tier: a fixed one-ply rule ladder.
//!
//! Rules are tried in order and the first that applies decides:
//! win, block, center, random corner, random square. The ladder never
//! looks further than the next move, so a perfect opponent can beat it.

use super::easy;
use crate::rules::find_completing_move;
use crate::{Board, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Picks a move for `player` using the rule ladder.
pub fn pick<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<Position> {
    if let Some(pos) = find_completing_move(board, player) {
        debug!(%pos, "Taking the win");
        return Some(pos);
    }

    if let Some(pos) = find_completing_move(board, player.opponent()) {
        debug!(%pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = corners.choose(rng) {
        return Some(pos);
    }

    easy::pick(board, rng)
}
