//! Wordgames - word-chain puzzle bot
//!
//! Hosts the `wordchain` games in chat channels.
//!
//! # Architecture
//!
//! - **Config**: TOML bot configuration with environment overrides
//! - **Command**: chat command parsing (`!wordshrink`, `!wordtwist`, `!wordquit`)
//! - **Session**: one game per channel
//! - **Console**: line-oriented stdin/stdout transport
//!
//! # Example
//!
//! ```no_run
//! use wordgames::{Bot, BotConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BotConfig::load("wordgames.toml")?;
//! let mut bot = Bot::new(&config);
//! for line in bot.handle("#words", "alice", "!wordtwist 5") {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;

// Private module declarations
mod bot;
mod command;
mod config;
mod session;

// Crate-level exports - Bot
pub use bot::Bot;

// Crate-level exports - Commands
pub use command::Command;

// Crate-level exports - Configuration
pub use config::{BotConfig, ConfigError, WORD_FILE_ENV};

// Crate-level exports - Session management
pub use session::SessionManager;
