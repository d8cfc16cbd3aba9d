//! Channel-facing commands: start, quit and answer routing.

use crate::dictionary::WordSource;
use crate::error::StartError;
use crate::generator::GenerationSettings;
use crate::index::Variant;
use crate::registry::SessionRegistry;
use crate::session::GameSession;
use rand::RngCore;
use tracing::{debug, info, instrument, warn};

/// Accepted chain lengths and the default when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Shortest accepted chain.
    pub min: usize,
    /// Longest accepted chain.
    pub max: usize,
    /// Length used when the command gives none.
    pub default: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: 4,
            max: 7,
            default: 4,
        }
    }
}

impl LengthBounds {
    /// Whether `length` is within bounds.
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    /// The message shown for an out-of-range length.
    pub fn usage(&self) -> String {
        format!(
            "Please use a length between {} and {}.",
            self.min, self.max
        )
    }
}

/// The word game plugin: one session per channel.
///
/// The host supplies session storage, the word source and randomness,
/// then forwards commands and channel messages; every method returns the
/// lines to send back to that channel.
pub struct WordGames<S, W, R> {
    sessions: S,
    words: W,
    rng: R,
    settings: GenerationSettings,
    lengths: LengthBounds,
}

impl<S, W, R> WordGames<S, W, R>
where
    S: SessionRegistry,
    W: WordSource,
    R: RngCore,
{
    /// Creates the plugin.
    pub fn new(
        sessions: S,
        words: W,
        rng: R,
        settings: GenerationSettings,
        lengths: LengthBounds,
    ) -> Self {
        Self {
            sessions,
            words,
            rng,
            settings,
            lengths,
        }
    }

    /// Session storage.
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Length bounds in force.
    pub fn lengths(&self) -> &LengthBounds {
        &self.lengths
    }

    /// Starts a `variant` game in `channel` unless one is already running.
    #[instrument(skip(self))]
    pub fn start_game(
        &mut self,
        channel: &str,
        variant: Variant,
        length: Option<usize>,
    ) -> Vec<String> {
        let length = length.unwrap_or(self.lengths.default);
        if !self.lengths.contains(length) {
            debug!(length, "Length out of bounds");
            return vec![self.lengths.usage()];
        }

        if let Some(session) = self.sessions.get(channel).filter(|s| s.is_running()) {
            warn!("Game already running");
            let mut lines = vec!["A word game is already running here.".to_string()];
            lines.extend(session.show());
            return lines;
        }

        match GameSession::start(variant, &self.words, length, self.settings, &mut self.rng) {
            Ok(session) => {
                let lines = session.show();
                self.sessions.insert(channel, session);
                info!("Session created");
                lines
            }
            Err(e) => {
                warn!(error = %e, "Unable to start game");
                vec![format!("Unable to start a word game: {}.", reason(&e))]
            }
        }
    }

    /// Stops the running game in `channel`, revealing its chain.
    #[instrument(skip(self))]
    pub fn quit_game(&mut self, channel: &str) -> Vec<String> {
        match self.sessions.get_mut(channel) {
            Some(session) if session.is_running() => session.stop(),
            _ => vec!["No word game currently running.".to_string()],
        }
    }

    /// Offers an ordinary channel message to the channel's session, if any.
    #[instrument(skip(self, text))]
    pub fn handle_message(&mut self, channel: &str, nick: &str, text: &str) -> Vec<String> {
        match self.sessions.get_mut(channel) {
            Some(session) => session.handle_message(nick, text).into_lines(),
            None => Vec::new(),
        }
    }
}

fn reason(error: &StartError) -> String {
    match error {
        StartError::WordList(_) => "the word list could not be loaded".to_string(),
        StartError::Generation(e) => e.to_string().to_lowercase(),
    }
}
