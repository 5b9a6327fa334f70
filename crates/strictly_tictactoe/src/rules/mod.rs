//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Both the game model and
//! the decision engine evaluate positions through these.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, WinPattern, find_completing_move, has_won, winner, winning_line};
