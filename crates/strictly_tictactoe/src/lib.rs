//! Pure tic-tac-toe game logic with computer opponents.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: win, draw and one-move-threat detection over a board snapshot
//! - **Game**: the mutable state container that owns turn order
//! - **Engine**: [`select_move`] with Easy, Medium and Hard tiers
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_tictactoe::{Board, Difficulty, Player, Position, select_move};
//!
//! let board: Board = "XX.OO....".parse()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let choice = select_move(&board, Difficulty::Hard, Player::X, &mut rng);
//! assert_eq!(choice, Some(Position::TopRight));
//! # Ok::<(), strictly_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod difficulty;
pub mod engine;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use difficulty::Difficulty;
pub use engine::select_move;
pub use error::{EngineError, EngineErrorKind};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use rules::{WIN_PATTERNS, WinPattern};
pub use types::{Board, Player, Square};
