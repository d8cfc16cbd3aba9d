//! Bot configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use wordchain::{GenerationSettings, LengthBounds, RejectPolicy, SearchBudget};

/// Environment variable overriding `word_file`.
pub const WORD_FILE_ENV: &str = "WORDGAMES_WORD_FILE";

/// Configuration for the word game bot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BotConfig {
    /// Line-oriented word list, one word per line.
    #[serde(default = "default_word_file")]
    word_file: PathBuf,

    /// Prefix marking a chat line as a command.
    #[serde(default = "default_command_prefix")]
    command_prefix: String,

    /// Chain length when a start command gives none.
    #[serde(default = "default_length")]
    default_length: usize,

    /// Shortest accepted chain length.
    #[serde(default = "default_min_length")]
    min_length: usize,

    /// Longest accepted chain length.
    #[serde(default = "default_max_length")]
    max_length: usize,

    /// Candidate puzzles tried before a start fails.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Node expansions allowed per solution search.
    #[serde(default = "default_max_expansions")]
    max_expansions: usize,

    /// When trivial solutions disqualify a puzzle.
    #[serde(default)]
    reject_policy: RejectPolicy,

    /// Fixed RNG seed for reproducible puzzles.
    #[serde(default)]
    seed: Option<u64>,

    /// Whether to keep colour codes in output.
    #[serde(default = "default_color")]
    color: bool,
}

#[instrument]
fn default_word_file() -> PathBuf {
    PathBuf::from("/usr/share/dict/words")
}

#[instrument]
fn default_command_prefix() -> String {
    "!".to_string()
}

#[instrument]
fn default_length() -> usize {
    LengthBounds::default().default
}

#[instrument]
fn default_min_length() -> usize {
    LengthBounds::default().min
}

#[instrument]
fn default_max_length() -> usize {
    LengthBounds::default().max
}

#[instrument]
fn default_max_attempts() -> usize {
    GenerationSettings::default().max_attempts
}

#[instrument]
fn default_max_expansions() -> usize {
    SearchBudget::default().max_expansions
}

#[instrument]
fn default_color() -> bool {
    true
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            word_file: default_word_file(),
            command_prefix: default_command_prefix(),
            default_length: default_length(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            max_attempts: default_max_attempts(),
            max_expansions: default_max_expansions(),
            reject_policy: RejectPolicy::default(),
            seed: None,
            color: default_color(),
        }
    }
}

impl BotConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(word_file = %config.word_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise defaults; then applies env overrides.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            Self::from_file(path.as_ref())?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };
        if let Ok(word_file) = std::env::var(WORD_FILE_ENV) {
            info!(word_file = %word_file, "Overriding word file from environment");
            config.word_file = PathBuf::from(word_file);
        }
        Ok(config)
    }

    /// Replaces the word file.
    pub fn with_word_file(mut self, word_file: impl Into<PathBuf>) -> Self {
        self.word_file = word_file.into();
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Generation limits derived from this configuration.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            max_attempts: self.max_attempts,
            search: SearchBudget {
                max_expansions: self.max_expansions,
            },
            reject_policy: self.reject_policy,
        }
    }

    /// Length bounds derived from this configuration.
    pub fn length_bounds(&self) -> LengthBounds {
        LengthBounds {
            min: self.min_length,
            max: self.max_length,
            default: self.default_length,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length < 2 || self.min_length > self.max_length {
            return Err(ConfigError::new(format!(
                "Invalid length bounds {}..={}",
                self.min_length, self.max_length
            )));
        }
        if !self.length_bounds().contains(self.default_length) {
            return Err(ConfigError::new(format!(
                "Default length {} is outside {}..={}",
                self.default_length, self.min_length, self.max_length
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
