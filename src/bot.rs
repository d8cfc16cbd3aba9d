//! The word game bot: commands and answers for every channel.

use crate::command::Command;
use crate::config::BotConfig;
use crate::session::SessionManager;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, instrument};
use wordchain::markup::strip_formatting;
use wordchain::{WordFile, WordGames};

/// Dispatches chat lines to the word games plugin.
pub struct Bot {
    games: WordGames<SessionManager, WordFile, ChaCha20Rng>,
    command_prefix: String,
    color: bool,
}

impl Bot {
    /// Creates a bot from configuration.
    #[instrument(skip(config), fields(word_file = %config.word_file().display()))]
    pub fn new(config: &BotConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                info!(seed, "Using fixed RNG seed");
                ChaCha20Rng::seed_from_u64(*seed)
            }
            None => ChaCha20Rng::from_rng(&mut rand::rng()),
        };
        Self {
            games: WordGames::new(
                SessionManager::new(),
                WordFile::new(config.word_file()),
                rng,
                config.generation_settings(),
                config.length_bounds(),
            ),
            command_prefix: config.command_prefix().clone(),
            color: *config.color(),
        }
    }

    /// Session storage, for inspection.
    pub fn sessions(&self) -> &SessionManager {
        self.games.sessions()
    }

    /// Handles one message from `nick` in `channel`, returning lines to send there.
    #[instrument(skip(self, text))]
    pub fn handle(&mut self, channel: &str, nick: &str, text: &str) -> Vec<String> {
        let lines = match Command::parse(text, &self.command_prefix) {
            Some(Command::Start { variant, length }) => {
                debug!(%variant, ?length, "Start command");
                self.games.start_game(channel, variant, length)
            }
            Some(Command::BadLength) => vec![self.games.lengths().usage()],
            Some(Command::Quit) => self.games.quit_game(channel),
            None => self.games.handle_message(channel, nick, text),
        };
        if self.color {
            lines
        } else {
            lines.iter().map(|l| strip_formatting(l)).collect()
        }
    }
}
