//! A generated puzzle and everything known about its solutions.

use crate::index::Variant;
use crate::search::{Chain, SolutionSet};
use derive_getters::Getters;
use serde::Serialize;

/// A start-to-end word chain plus every alternative of the same length.
///
/// Immutable once generated; `solutions` always contains `chain`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Puzzle {
    /// Transformation rule linking consecutive words.
    variant: Variant,
    /// The chain the generator walked.
    chain: Chain,
    /// All chains of the same length between the same endpoints.
    solutions: SolutionSet,
}

impl Puzzle {
    /// Assembles a puzzle from a chain and its solution set.
    ///
    /// The chain is added to the set if the caller left it out.
    pub fn new(variant: Variant, chain: Chain, mut solutions: SolutionSet) -> Self {
        solutions.insert(chain.clone());
        Self {
            variant,
            chain,
            solutions,
        }
    }

    /// First word.
    pub fn start(&self) -> &str {
        self.chain.first().map(String::as_str).unwrap_or_default()
    }

    /// Last word.
    pub fn end(&self) -> &str {
        self.chain.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of words in the chain.
    pub fn length(&self) -> usize {
        self.chain.len()
    }
}
