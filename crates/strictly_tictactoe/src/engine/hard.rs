//! Hard tier: exhaustive minimax search.
//!
//! Terminal scores are measured from the acting player's side. A win
//! found `depth` plies after the candidate move scores `10 - depth`, a
//! loss scores `depth - 10` and a full board scores 0, so the search
//! prefers the fastest win and the slowest loss. The tree is at most 9
//! plies deep and every branch works on its own copy of the board.

use crate::rules::has_won;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Picks the move with the strictly highest minimax score.
///
/// Candidates are tried in index order, so the lowest index wins ties.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn pick(board: &Board, player: Player) -> Option<Position> {
    best_move(board, player).map(|(pos, _)| pos)
}

/// Score of the best move for `player`, or `None` on a full board.
///
/// With perfect play from both sides the empty board scores 0.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn root_score(board: &Board, player: Player) -> Option<i32> {
    best_move(board, player).map(|(_, score)| score)
}

fn best_move(board: &Board, player: Player) -> Option<(Position, i32)> {
    let mut best: Option<(Position, i32)> = None;
    for pos in board.empty_positions() {
        let score = minimax(&board.with_mark(pos, player), 0, false, player);
        debug!(%pos, score, "Scored candidate");
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }
    best
}

/// Scores `board` for `player`, with `maximizing` telling whose turn it is.
fn minimax(board: &Board, depth: i32, maximizing: bool, player: Player) -> i32 {
    let opponent = player.opponent();

    if has_won(board, player) {
        return WIN_SCORE - depth;
    }
    if has_won(board, opponent) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { player } else { opponent };
    let scores = board
        .empty_positions()
        .map(|pos| minimax(&board.with_mark(pos, mover), depth + 1, !maximizing, player));

    let best = if maximizing { scores.max() } else { scores.min() };
    // Non-full board always has at least one child.
    best.unwrap_or(0)
}
