//! Exhaustive enumeration of fixed-length chains between two words.

use crate::error::SearchExhausted;
use crate::index::WordIndex;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// An ordered word chain.
pub type Chain = Vec<String>;

/// Every distinct chain found for one start/end pair.
pub type SolutionSet = BTreeSet<Chain>;

/// Upper bound on depth-first node expansions for one search.
///
/// The search keeps no visited set, so dense dictionaries can blow up;
/// the budget turns that into an error instead of a hang. Within the
/// budget the result is exactly what an unbounded search would return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum number of chains extended by one word.
    pub max_expansions: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_expansions: 2_000_000,
        }
    }
}

/// Finds all chains of exactly `length` words from `start` to `end`.
///
/// Each consecutive pair is an edge in `index`. Paths may revisit words.
#[instrument(skip(index, budget), fields(variant = %index.variant()))]
pub fn find_all(
    index: &WordIndex,
    start: &str,
    end: &str,
    length: usize,
    budget: SearchBudget,
) -> Result<SolutionSet, SearchExhausted> {
    let mut search = Search {
        index,
        end,
        length,
        budget,
        expansions: 0,
        found: SolutionSet::new(),
    };
    match length {
        0 => {}
        1 => {
            if start == end {
                search.found.insert(vec![start.to_string()]);
            }
        }
        _ => {
            let mut path = Vec::with_capacity(length);
            path.push(start.to_string());
            search.extend(&mut path)?;
        }
    }
    debug!(
        solutions = search.found.len(),
        expansions = search.expansions,
        "Search finished"
    );
    Ok(search.found)
}

struct Search<'a> {
    index: &'a WordIndex,
    end: &'a str,
    length: usize,
    budget: SearchBudget,
    expansions: usize,
    found: SolutionSet,
}

impl Search<'_> {
    fn extend(&mut self, path: &mut Chain) -> Result<(), SearchExhausted> {
        self.expansions += 1;
        if self.expansions > self.budget.max_expansions {
            warn!(expansions = self.expansions, "Search budget exhausted");
            return Err(SearchExhausted {
                expansions: self.budget.max_expansions,
            });
        }

        let index = self.index;
        let Some(last) = path.last() else {
            return Ok(());
        };
        let successors = index.successors(last);

        if path.len() == self.length - 1 {
            if successors.iter().any(|w| w == self.end) {
                let mut chain = path.clone();
                chain.push(self.end.to_string());
                self.found.insert(chain);
            }
            return Ok(());
        }

        for next in successors {
            path.push(next.clone());
            let result = self.extend(path);
            path.pop();
            result?;
        }
        Ok(())
    }
}
