//! Reading and checking players' candidate chains.

use crate::dictionary::{Dictionary, is_playable};
use crate::index::WordIndex;
use crate::puzzle::Puzzle;
use crate::search::Chain;
use tracing::{debug, instrument};

/// Token separating words in a submitted chain.
pub const SEPARATOR: char = '>';

/// Why a well-formed attempt was turned down.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The chain starts somewhere else.
    #[display("{} is not the starting word.", _0)]
    NotStartingWord(String),

    /// The chain ends somewhere else.
    #[display("{} is not the final word.", _0)]
    NotFinalWord(String),

    /// A word is missing from the dictionary.
    #[display("{} is not a word I know.", _0)]
    UnknownWord(String),

    /// Two neighbouring words are not one step apart.
    #[display("{} does not follow from {}.", word, previous)]
    DoesNotFollow {
        /// The offending word.
        word: String,
        /// The word before it.
        previous: String,
    },
}

impl std::error::Error for Rejection {}

/// Splits a message on `>` into trimmed words.
///
/// Returns `None` unless every piece is lowercase letters only; such
/// messages are ordinary chat, not attempts.
pub fn parse(text: &str) -> Option<Chain> {
    text.split(SEPARATOR)
        .map(str::trim)
        .map(|token| is_playable(token).then(|| token.to_string()))
        .collect()
}

/// Turns parsed words into a full-length chain for `puzzle`.
///
/// A chain missing both endpoints (two words short) gets them filled in.
/// Any other length mismatch means the message was not an attempt.
pub fn complete(puzzle: &Puzzle, words: Chain) -> Option<Chain> {
    let length = puzzle.length();
    if length >= 2 && words.len() == length - 2 {
        let mut full = Vec::with_capacity(length);
        full.push(puzzle.start().to_string());
        full.extend(words);
        full.push(puzzle.end().to_string());
        return Some(full);
    }
    (words.len() == length).then_some(words)
}

/// Checks a full-length chain against the puzzle, stopping at the first problem.
#[instrument(skip_all, fields(start = %puzzle.start(), end = %puzzle.end()))]
pub fn check(
    puzzle: &Puzzle,
    index: &WordIndex,
    dictionary: &Dictionary,
    chain: &[String],
) -> Result<(), Rejection> {
    let (Some(first), Some(last)) = (chain.first(), chain.last()) else {
        return Err(Rejection::NotStartingWord(String::new()));
    };
    if first != puzzle.start() {
        return Err(Rejection::NotStartingWord(first.clone()));
    }
    if last != puzzle.end() {
        return Err(Rejection::NotFinalWord(last.clone()));
    }
    if let Some(unknown) = chain.iter().find(|w| !dictionary.contains(w)) {
        return Err(Rejection::UnknownWord(unknown.clone()));
    }
    if let Some(pair) = chain.windows(2).find(|p| !index.is_edge(&p[0], &p[1])) {
        return Err(Rejection::DoesNotFollow {
            word: pair[1].clone(),
            previous: pair[0].clone(),
        });
    }
    debug!("Chain is valid");
    Ok(())
}
