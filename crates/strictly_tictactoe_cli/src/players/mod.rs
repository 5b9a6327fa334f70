//! Player trait and implementations.

mod computer;

pub use computer::ComputerPlayer;

use anyhow::Result;
use strictly_tictactoe::{Game, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the game's current position.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
