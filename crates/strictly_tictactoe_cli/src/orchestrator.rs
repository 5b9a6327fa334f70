//! Game orchestration between players.

use crate::config::MatchConfig;
use crate::players::{ComputerPlayer, Player};
use anyhow::Result;
use serde::Serialize;
use strictly_tictactoe::{Game, GameStatus, Player as Mark};
use tracing::{debug, info, instrument, warn};

/// Attempts a player gets to produce a legal move before the game is abandoned.
const MAX_ATTEMPTS: usize = 3;

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
        }
    }

    /// Returns the game as it stands.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until someone wins or the board fills.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.game.reset();

        while let Some(mark) = self.game.to_move() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            let mut attempts = 0;
            loop {
                let position = player.get_move(&self.game).await?;
                match self.game.make_move(position) {
                    Ok(status) => {
                        debug!(player = %player.name(), %mark, %position, ?status, "Move made");
                        break;
                    }
                    Err(e) => {
                        attempts += 1;
                        warn!(player = %player.name(), error = %e, attempts, "Illegal move");
                        if attempts >= MAX_ATTEMPTS {
                            anyhow::bail!("{} failed to make a legal move: {}", player.name(), e);
                        }
                    }
                }
            }
        }

        let status = self.game.status();
        info!(?status, "Game over");
        Ok(status)
    }
}

/// Tally of a run of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl MatchSummary {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `config.games()` computer-vs-computer games.
///
/// `on_game_over` sees each finished game before the next one starts.
#[instrument(skip(config, on_game_over))]
pub async fn run_match<F>(config: &MatchConfig, mut on_game_over: F) -> Result<MatchSummary>
where
    F: FnMut(u32, &Game),
{
    let x_seed = *config.seed();
    let o_seed = x_seed.map(|seed| seed.wrapping_add(1));
    let x_tier = *config.x_difficulty();
    let o_tier = *config.o_difficulty();
    let player_x = ComputerPlayer::new(format!("{x_tier} X"), x_tier, x_seed)
        .with_think_delay(config.think_delay());
    let player_o = ComputerPlayer::new(format!("{o_tier} O"), o_tier, o_seed)
        .with_think_delay(config.think_delay());

    let mut orchestrator = Orchestrator::new(Box::new(player_x), Box::new(player_o));
    let mut summary = MatchSummary::default();

    for round in 1..=*config.games() {
        let status = orchestrator.run().await?;
        summary.record(status);
        on_game_over(round, orchestrator.game());
    }

    info!(%summary, "Match finished");
    Ok(summary)
}
