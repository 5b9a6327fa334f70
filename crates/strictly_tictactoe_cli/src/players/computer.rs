//! Computer player backed by the decision engine.

use super::Player;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_tictactoe::{Difficulty, Game, Position, select_move};
use tracing::{debug, instrument};

/// Computer opponent playing at a fixed difficulty.
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
    think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player. A seed makes its random choices repeatable.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.as_ref().to_string(),
            difficulty,
            rng,
            think_delay: Duration::ZERO,
        }
    }

    /// Waits this long before revealing each move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, difficulty = %self.difficulty))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        let player = game
            .to_move()
            .ok_or_else(|| anyhow::anyhow!("Game is over"))?;
        let board = *game.board();
        let difficulty = self.difficulty;
        // Hand the search its own generator so it can leave the async thread.
        let mut rng = StdRng::from_rng(&mut self.rng)?;

        let choice = tokio::task::spawn_blocking(move || {
            select_move(&board, difficulty, player, &mut rng)
        })
        .await?;

        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let position = choice.ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(%position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Board;

    #[tokio::test]
    async fn test_hard_player_takes_win() {
        let mut game = Game::new();
        // X: 0, 1   O: 3, 4
        for pos in [0, 3, 1, 4] {
            game.make_move(Position::from_index(pos).unwrap()).unwrap();
        }
        let mut ai = ComputerPlayer::new("hard", Difficulty::Hard, Some(1));
        assert_eq!(ai.get_move(&game).await.unwrap(), Position::TopRight);
        assert_eq!(game.board(), &"XX.OO....".parse::<Board>().unwrap());
    }

    #[tokio::test]
    async fn test_finished_game_is_an_error() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.make_move(Position::from_index(pos).unwrap()).unwrap();
        }
        let mut ai = ComputerPlayer::new("easy", Difficulty::Easy, Some(1));
        assert!(ai.get_move(&game).await.is_err());
    }

    #[tokio::test]
    async fn test_seeded_players_agree() {
        let game = Game::new();
        let mut a = ComputerPlayer::new("a", Difficulty::Easy, Some(42));
        let mut b = ComputerPlayer::new("b", Difficulty::Easy, Some(42));
        for _ in 0..5 {
            assert_eq!(a.get_move(&game).await.unwrap(), b.get_move(&game).await.unwrap());
        }
    }
}
