//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Category of engine failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Caller handed the engine something that is not a legal 3x3 board or player.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`EngineErrorKind::InvalidInput`] error.
    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EngineErrorKind::InvalidInput(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}
