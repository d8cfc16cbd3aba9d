//! Error types for puzzle construction and game start.

use derive_more::{Display, Error, From};
use tracing::{error, instrument};

/// Word list could not be read or contained no usable words.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(error_message = %message, "Word list error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The exhaustive search visited more nodes than its budget allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Solution search gave up after {} expansions", expansions)]
pub struct SearchExhausted {
    /// Number of nodes expanded before giving up.
    pub expansions: usize,
}

/// Puzzle generation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GenerationError {
    /// No dictionary word is long enough to seed a chain.
    #[display("No words are long enough for a chain of {} words", length)]
    NoCandidates {
        /// Requested chain length.
        length: usize,
    },

    /// Every attempt within the retry budget was discarded.
    #[display("No suitable puzzle found after {} attempts", attempts)]
    Exhausted {
        /// Attempts made before giving up.
        attempts: usize,
    },
}

impl std::error::Error for GenerationError {}

/// A game could not be started in a channel.
#[derive(Debug, Clone, Display, From)]
pub enum StartError {
    /// The word list could not be loaded.
    #[display("{}", _0)]
    WordList(WordListError),

    /// No puzzle could be generated.
    #[display("{}", _0)]
    Generation(GenerationError),
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartError::WordList(e) => Some(e),
            StartError::Generation(e) => Some(e),
        }
    }
}
