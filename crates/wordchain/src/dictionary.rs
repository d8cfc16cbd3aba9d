//! Word lists and where they come from.

use crate::error::WordListError;
use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A fixed, ordered sequence of words plus a membership index.
///
/// Order is preserved exactly as loaded (duplicates included) because it
/// feeds adjacency construction; membership checks go through the set.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    known: HashSet<String>,
}

impl Dictionary {
    /// Creates a dictionary from already-cleaned words.
    pub fn new(words: Vec<String>) -> Self {
        let known = words.iter().cloned().collect();
        Self { words, known }
    }

    /// Reads one word per line, trimming whitespace and skipping blank lines.
    #[instrument(skip(reader))]
    pub fn from_reader(reader: impl BufRead) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line
                .map_err(|e| WordListError::new(format!("Failed to read word list: {}", e)))?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        debug!(count = words.len(), "Read word list");
        Ok(Self::new(words))
    }

    /// Reads a word list file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            WordListError::new(format!(
                "Failed to open word list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Drops every token that is not purely lowercase ASCII letters.
    #[instrument(skip(self))]
    pub fn retain_playable(&mut self) {
        let before = self.words.len();
        self.words.retain(|w| is_playable(w));
        self.known.retain(|w| is_playable(w));
        debug!(before, after = self.words.len(), "Filtered unplayable words");
    }

    /// All words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    /// Number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Whether a token is a non-empty run of lowercase ASCII letters.
pub fn is_playable(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase())
}

/// Something that can produce a fresh dictionary at game start.
pub trait WordSource {
    /// Loads the words, failing if none are usable.
    fn load(&self) -> Result<Dictionary, WordListError>;
}

/// A word list file, re-read on every load.
#[derive(Debug, Clone)]
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    /// Creates a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for WordFile {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Dictionary, WordListError> {
        let mut dictionary = Dictionary::from_file(&self.path)?;
        dictionary.retain_playable();
        if dictionary.is_empty() {
            return Err(WordListError::new(format!(
                "Word list {} has no usable words",
                self.path.display()
            )));
        }
        info!(count = dictionary.len(), "Loaded word list");
        Ok(dictionary)
    }
}

impl WordSource for Dictionary {
    fn load(&self) -> Result<Dictionary, WordListError> {
        if self.is_empty() {
            return Err(WordListError::new("Word list is empty"));
        }
        Ok(self.clone())
    }
}
