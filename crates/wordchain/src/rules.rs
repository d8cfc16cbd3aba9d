//! Rules for discarding uninteresting puzzles.

use crate::index::Variant;
use serde::{Deserialize, Serialize};

/// Whether `solution` is too easy to count as a puzzle.
///
/// - Shrink: two words in the chain where one contains the other, so the
///   step is plain prefix/suffix stripping.
/// - Twist: the chain is shorter than the requested length. Search only
///   yields exact-length chains, so in practice this never fires.
pub fn is_trivial(variant: Variant, solution: &[String], requested_length: usize) -> bool {
    match variant {
        Variant::Shrink => has_substring_pair(solution),
        Variant::Twist => solution.len() < requested_length,
    }
}

fn has_substring_pair(solution: &[String]) -> bool {
    solution.iter().enumerate().any(|(i, earlier)| {
        solution[i + 1..]
            .iter()
            .any(|later| earlier.contains(later.as_str()) || later.contains(earlier.as_str()))
    })
}

/// How many trivial solutions it takes to throw a candidate puzzle away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectPolicy {
    /// Discard only when every solution is trivial.
    #[default]
    AllTrivial,
    /// Discard when any solution is trivial.
    AnyTrivial,
}

impl RejectPolicy {
    /// Applies the policy to a complete solution set.
    pub fn rejects<'a>(
        self,
        variant: Variant,
        mut solutions: impl Iterator<Item = &'a Vec<String>>,
        requested_length: usize,
    ) -> bool {
        let trivial = |s: &Vec<String>| is_trivial(variant, s, requested_length);
        match self {
            RejectPolicy::AllTrivial => solutions.all(trivial),
            RejectPolicy::AnyTrivial => solutions.any(trivial),
        }
    }
}
