//! Match runner for the strictly_tictactoe computer opponents.
//!
//! - **Config**: TOML match settings
//! - **Players**: async [`Player`] trait with a computer implementation
//! - **Orchestrator**: turn loop and match tally

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
mod players;

pub use config::{ConfigError, MatchConfig};
pub use orchestrator::{MatchSummary, Orchestrator, run_match};
pub use players::{ComputerPlayer, Player};
