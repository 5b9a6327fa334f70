//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions that win the game when held by one player.
pub type WinPattern = [Position; 3];

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line on the board, if any.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinPattern> {
    WIN_PATTERNS.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

/// Checks whether `player` holds all three squares of any line.
///
/// Not instrumented: the minimax search calls this at every node.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Finds a square that completes a line for `player` in one move.
///
/// A line qualifies when it holds exactly two of `player`'s marks and one
/// empty square. Lines are scanned in [`WIN_PATTERNS`] order and the first
/// match wins.
#[instrument]
pub fn find_completing_move(board: &Board, player: Player) -> Option<Position> {
    let mark = Square::Occupied(player);
    WIN_PATTERNS.iter().find_map(|line| {
        let owned = line.iter().filter(|&&pos| board.get(pos) == mark).count();
        let empty = line.iter().copied().find(|&pos| board.is_empty(pos));
        match (owned, empty) {
            (2, Some(pos)) => Some(pos),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO XO. O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_pattern_is_a_win() {
        for line in WIN_PATTERNS {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert!(has_won(&board, Player::O), "{line:?}");
        }
    }

    #[test]
    fn test_completing_move_needs_two_marks_and_a_gap() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(find_completing_move(&board, Player::X), Some(Position::TopRight));
        assert_eq!(find_completing_move(&board, Player::O), Some(Position::MiddleRight));

        // Blocked line: two X and one O is not completable.
        let blocked: Board = "XXO ... ...".parse().unwrap();
        assert_eq!(find_completing_move(&blocked, Player::X), None);
    }

    #[test]
    fn test_completing_move_finds_gap_in_middle() {
        let board: Board = "O.. ... O..".parse().unwrap();
        assert_eq!(find_completing_move(&board, Player::O), Some(Position::MiddleLeft));
    }
}
