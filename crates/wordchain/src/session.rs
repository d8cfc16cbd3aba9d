//! Per-channel game lifecycle.

use crate::attempt::{self, Rejection};
use crate::dictionary::{Dictionary, WordSource};
use crate::error::StartError;
use crate::generator::{GenerationSettings, PuzzleGenerator};
use crate::index::{Variant, WordIndex};
use crate::markup::{self, LGRAY, WHITE};
use crate::puzzle::Puzzle;
use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for a correct chain.
    Running,
    /// Someone submitted a correct chain.
    Won {
        /// Nick of the first correct submitter.
        winner: String,
    },
    /// Stopped by command before anyone won.
    Stopped,
}

/// What became of one chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Not an attempt; nothing to say.
    Ignored,
    /// An attempt with a specific problem.
    Rejected(Rejection),
    /// The winning attempt.
    Won,
    /// A correct attempt after the game already ended.
    AlsoValid,
}

/// A verdict plus the lines to send to the channel.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Reply {
    /// Outcome of the message.
    verdict: Verdict,
    /// Text to relay, in order.
    lines: Vec<String>,
}

impl Reply {
    /// Consumes the reply, keeping only the lines to relay.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn ignored() -> Self {
        Self {
            verdict: Verdict::Ignored,
            lines: Vec::new(),
        }
    }
}

/// One puzzle in one channel, from generation until it is won or stopped.
///
/// Ended sessions keep answering: later correct chains are acknowledged
/// without a second win.
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    index: WordIndex,
    dictionary: Dictionary,
    status: SessionStatus,
}

impl GameSession {
    /// Wraps an already generated puzzle in a running session.
    pub fn new(puzzle: Puzzle, index: WordIndex, dictionary: Dictionary) -> Self {
        Self {
            puzzle,
            index,
            dictionary,
            status: SessionStatus::Running,
        }
    }

    /// Loads the words, builds a fresh index and generates a puzzle.
    ///
    /// # Errors
    ///
    /// Fails when the word list cannot be loaded or no puzzle is found
    /// within the generation budget.
    #[instrument(skip(source, settings, rng))]
    pub fn start<W, R>(
        variant: Variant,
        source: &W,
        length: usize,
        settings: GenerationSettings,
        rng: &mut R,
    ) -> Result<Self, StartError>
    where
        W: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let dictionary = source.load()?;
        let index = WordIndex::build(dictionary.words(), variant);
        let puzzle =
            PuzzleGenerator::new(&index, dictionary.words(), settings).generate(rng, length)?;
        info!(
            variant = %variant,
            start = %puzzle.start(),
            end = %puzzle.end(),
            "Game started"
        );
        Ok(Self::new(puzzle, index, dictionary))
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Current lifecycle status.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Whether answers can still win.
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    fn announce(&self, msg: &str) -> String {
        markup::announce(*self.puzzle.variant(), msg)
    }

    /// The masked puzzle and its solution count.
    pub fn show(&self) -> Vec<String> {
        vec![
            self.announce(&markup::masked_chain(self.puzzle.chain())),
            markup::solution_count(self.puzzle.solutions().len()),
        ]
    }

    /// Ends the game and reveals the generated chain.
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> Vec<String> {
        info!(start = %self.puzzle.start(), "Game stopped");
        self.status = SessionStatus::Stopped;
        vec![self.announce(&markup::revealed_chain(self.puzzle.chain()))]
    }

    /// Treats a chat message from `nick` as a possible answer.
    #[instrument(skip(self, text))]
    pub fn handle_message(&mut self, nick: &str, text: &str) -> Reply {
        let Some(words) = attempt::parse(text) else {
            return Reply::ignored();
        };
        let Some(chain) = attempt::complete(&self.puzzle, words) else {
            debug!("Word count does not fit the puzzle");
            return Reply::ignored();
        };

        let checked = attempt::check(&self.puzzle, &self.index, &self.dictionary, &chain);
        if let Err(rejection) = checked {
            debug!(%rejection, "Attempt rejected");
            let line = format!("{}: {}", nick, rejection);
            return Reply {
                verdict: Verdict::Rejected(rejection),
                lines: vec![line],
            };
        }

        if self.is_running() {
            info!("Puzzle solved");
            self.status = SessionStatus::Won {
                winner: nick.to_string(),
            };
            Reply {
                verdict: Verdict::Won,
                lines: vec![
                    self.announce(&format!("{}{}{} got it!", WHITE, nick, LGRAY)),
                    self.announce(&markup::revealed_chain(&chain)),
                ],
            }
        } else {
            Reply {
                verdict: Verdict::AlsoValid,
                lines: vec![format!("{}: Your solution is also valid.", nick)],
            }
        }
    }
}
