//! Chat command parsing.

use strum::IntoEnumIterator;
use wordchain::Variant;

const QUIT: &str = "wordquit";

/// A bot command typed in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game; `length` is `None` when not given.
    Start {
        /// Which game.
        variant: Variant,
        /// Requested chain length.
        length: Option<usize>,
    },
    /// A start command whose length argument is not a number.
    BadLength,
    /// Stop the running game.
    Quit,
}

impl Command {
    /// Parses `text` if it starts with `prefix` and names a known command.
    ///
    /// Returns `None` for ordinary chat and unknown commands.
    pub fn parse(text: &str, prefix: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix(prefix)?;
        let mut parts = rest.split_whitespace();
        let name = parts.next()?;
        if name == QUIT {
            return Some(Command::Quit);
        }
        let variant = Variant::iter().find(|v| v.command() == name)?;
        match parts.next() {
            None => Some(Command::Start {
                variant,
                length: None,
            }),
            Some(arg) => match arg.parse() {
                Ok(length) => Some(Command::Start {
                    variant,
                    length: Some(length),
                }),
                Err(_) => Some(Command::BadLength),
            },
        }
    }
}
