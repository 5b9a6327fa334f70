//! Integration tests for config loading and the match runner.

use std::fs;
use strictly_tictactoe::{Difficulty, GameStatus, Player as Mark};
use strictly_tictactoe_cli::{ComputerPlayer, MatchConfig, MatchSummary, Orchestrator, run_match};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("match.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_config_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"x_difficulty = "easy"
o_difficulty = "hard"
games = 3
seed = 17
think_delay_ms = 250
"#,
    );

    let config = MatchConfig::from_file(&path).expect("Config should load");
    assert_eq!(config.x_difficulty(), &Difficulty::Easy);
    assert_eq!(config.o_difficulty(), &Difficulty::Hard);
    assert_eq!(config.games(), &3);
    assert_eq!(config.seed(), &Some(17));
    assert_eq!(config.think_delay_ms(), &250);
}

#[test]
fn test_config_rejects_unknown_tier() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "x_difficulty = \"impossible\"\n");
    let err = MatchConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_config_rejects_zero_games() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "games = 0\n");
    assert!(MatchConfig::from_file(&path).is_err());
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[tokio::test]
async fn test_hard_vs_hard_always_draws() {
    let config = MatchConfig::default()
        .with_x_difficulty(Difficulty::Hard)
        .with_o_difficulty(Difficulty::Hard)
        .with_games(2);

    let mut boards = Vec::new();
    let summary = run_match(&config, |_, game| boards.push(*game.board()))
        .await
        .expect("Match should complete");

    assert_eq!(
        summary,
        MatchSummary {
            games: 2,
            x_wins: 0,
            o_wins: 0,
            draws: 2
        }
    );
    assert_eq!(boards.len(), 2);
    assert!(boards.iter().all(|b| b.is_full()));
}

#[tokio::test]
async fn test_hard_never_loses_to_easy() {
    let config = MatchConfig::default()
        .with_x_difficulty(Difficulty::Easy)
        .with_o_difficulty(Difficulty::Hard)
        .with_games(20)
        .with_seed(123);

    let summary = run_match(&config, |_, _| {}).await.expect("Match should complete");
    assert_eq!(summary.games, 20);
    assert_eq!(summary.x_wins, 0);
}

#[tokio::test]
async fn test_seeded_matches_repeat() {
    let config = MatchConfig::default()
        .with_x_difficulty(Difficulty::Easy)
        .with_o_difficulty(Difficulty::Medium)
        .with_games(5)
        .with_seed(7);

    let mut first = Vec::new();
    run_match(&config, |_, game| first.push(game.history().to_vec()))
        .await
        .unwrap();
    let mut second = Vec::new();
    run_match(&config, |_, game| second.push(game.history().to_vec()))
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_orchestrator_single_game() {
    let x = ComputerPlayer::new("medium", Difficulty::Medium, Some(1));
    let o = ComputerPlayer::new("hard", Difficulty::Hard, Some(2));
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o));

    let status = orchestrator.run().await.expect("Game should finish");
    assert!(status.is_over());
    assert_ne!(status, GameStatus::Won(Mark::X));
    // Medium opens in the center.
    assert_eq!(orchestrator.game().history()[0].position().to_index(), 4);
}
