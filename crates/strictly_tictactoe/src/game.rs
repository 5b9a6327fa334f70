//! Game state container for tic-tac-toe.
//!
//! Owns the mutable board and turn order that the decision engine only
//! ever sees as snapshots.

use super::action::{Move, MoveError};
use super::rules::{self, WinPattern};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        if self.status.is_over() {
            None
        } else {
            Some(self.current_player)
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line if the game has been won.
    pub fn winning_line(&self) -> Option<WinPattern> {
        match self.status {
            GameStatus::Won(_) => rules::winning_line(&self.board),
            _ => None,
        }
    }

    /// Empty positions in index order.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// The turn passes to the opponent only while the game continues.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        self.status = if rules::has_won(&self.board, player) {
            GameStatus::Won(player)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            self.current_player = player.opponent();
            GameStatus::InProgress
        };

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
