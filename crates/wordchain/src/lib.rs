//! Word-chain puzzle engine.
//!
//! Players get a start word and an end word and must find the words in
//! between, each one step from the last:
//!
//! - **Shrink**: drop one letter and rearrange (`stone > note > one`).
//! - **Twist**: change one letter in place (`cats > cars > bars > bard`).
//!
//! # Architecture
//!
//! - [`WordIndex`]: successor lists for a variant, built from a word list
//! - [`find_all`]: exhaustive search for every chain of a given length
//! - [`PuzzleGenerator`]: random walks filtered by triviality rules
//! - [`GameSession`]: one channel's puzzle, answer checking and status
//! - [`WordGames`]: start/quit/answer commands over a host-owned
//!   [`SessionRegistry`]
//!
//! # Example
//!
//! ```
//! use wordchain::{Dictionary, Variant, WordIndex, find_all, SearchBudget};
//!
//! let words: Vec<String> = ["cat", "cot", "cog", "dog", "dot"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let dictionary = Dictionary::new(words);
//! let index = WordIndex::build(dictionary.words(), Variant::Twist);
//! let solutions = find_all(&index, "cat", "dot", 3, SearchBudget::default()).unwrap();
//! assert_eq!(solutions.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod attempt;
mod dictionary;
mod error;
mod generator;
mod index;
pub mod markup;
mod plugin;
mod puzzle;
mod registry;
mod rules;
mod search;
mod session;

// Crate-level exports - Word lists
pub use dictionary::{Dictionary, WordFile, WordSource, is_playable};

// Crate-level exports - Adjacency
pub use index::{Variant, WordIndex, signature, wildcard_key};

// Crate-level exports - Search and generation
pub use generator::{GenerationSettings, PuzzleGenerator};
pub use puzzle::Puzzle;
pub use rules::{RejectPolicy, is_trivial};
pub use search::{Chain, SearchBudget, SolutionSet, find_all};

// Crate-level exports - Sessions
pub use attempt::{Rejection, SEPARATOR};
pub use plugin::{LengthBounds, WordGames};
pub use registry::{ChannelKey, SessionRegistry};
pub use session::{GameSession, Reply, SessionStatus, Verdict};

// Crate-level exports - Errors
pub use error::{GenerationError, SearchExhausted, StartError, WordListError};
