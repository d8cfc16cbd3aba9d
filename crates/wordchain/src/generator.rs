//! Random puzzle construction.

use crate::error::GenerationError;
use crate::index::WordIndex;
use crate::puzzle::Puzzle;
use crate::rules::RejectPolicy;
use crate::search::{self, Chain, SearchBudget};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument, warn};

/// Words a chain needs beyond its own length before a start word is eligible.
const START_HEADROOM: usize = 2;

/// Limits and policy for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Candidate chains tried before giving up.
    pub max_attempts: usize,
    /// Budget for each exhaustive search.
    pub search: SearchBudget,
    /// When trivial solutions disqualify a candidate.
    pub reject_policy: RejectPolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_attempts: 2_000,
            search: SearchBudget::default(),
            reject_policy: RejectPolicy::default(),
        }
    }
}

/// Builds random puzzles from an index and the word list it came from.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    index: &'a WordIndex,
    words: &'a [String],
    settings: GenerationSettings,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator.
    pub fn new(
        index: &'a WordIndex,
        words: &'a [String],
        settings: GenerationSettings,
    ) -> Self {
        Self {
            index,
            words,
            settings,
        }
    }

    /// Generates a puzzle of `length` words.
    ///
    /// Each attempt walks randomly from a long-enough start word, then
    /// enumerates every chain between the walk's endpoints; the attempt is
    /// kept unless the reject policy finds the solutions trivial.
    ///
    /// # Errors
    ///
    /// `NoCandidates` when no word has at least `length + 2` letters,
    /// `Exhausted` when `max_attempts` attempts were all discarded.
    #[instrument(skip(self, rng), fields(variant = %self.index.variant()))]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Puzzle, GenerationError> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|w| w.chars().count() >= START_HEADROOM + length)
            .collect();
        if candidates.is_empty() {
            warn!(length, "No start word candidates");
            return Err(GenerationError::NoCandidates { length });
        }
        debug!(candidates = candidates.len(), "Filtered start words");

        let variant = self.index.variant();
        for attempt in 1..=self.settings.max_attempts {
            let Some(chain) = self.random_walk(rng, &candidates, length) else {
                continue;
            };
            if chain.first() == chain.last() {
                debug!(attempt, "Walk returned to its start word");
                continue;
            }

            let (start, end) = (&chain[0], &chain[chain.len() - 1]);
            let solutions =
                match search::find_all(self.index, start, end, length, self.settings.search) {
                    Ok(solutions) => solutions,
                    Err(e) => {
                        debug!(attempt, error = %e, "Discarding candidate");
                        continue;
                    }
                };

            if self
                .settings
                .reject_policy
                .rejects(variant, solutions.iter(), length)
            {
                debug!(attempt, solutions = solutions.len(), "Candidate is trivial");
                continue;
            }

            info!(
                attempt,
                start = %start,
                end = %end,
                solutions = solutions.len(),
                "Generated puzzle"
            );
            return Ok(Puzzle::new(variant, chain, solutions));
        }

        warn!(attempts = self.settings.max_attempts, "Gave up generating puzzle");
        Err(GenerationError::Exhausted {
            attempts: self.settings.max_attempts,
        })
    }

    /// Picks a start word and follows random successors; `None` on a dead end.
    fn random_walk<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        candidates: &[&String],
        length: usize,
    ) -> Option<Chain> {
        let start = candidates.choose(rng)?;
        let mut chain = Vec::with_capacity(length);
        chain.push(start.to_string());
        while chain.len() < length {
            let last = chain.last()?;
            let next = self.index.successors(last).choose(rng)?.clone();
            chain.push(next);
        }
        Some(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Variant;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_dictionary_has_no_candidates() {
        let list = words(&["cat", "cot", "dot"]);
        let index = WordIndex::build(&list, Variant::Twist);
        let generator = PuzzleGenerator::new(&index, &list, GenerationSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            generator.generate(&mut rng, 4),
            Err(GenerationError::NoCandidates { length: 4 })
        );
    }

    #[test]
    fn test_dead_ends_exhaust_the_budget() {
        // Long enough to be candidates, but nothing links to anything.
        let list = words(&["abcdefg", "hijklmn", "opqrstu"]);
        let index = WordIndex::build(&list, Variant::Twist);
        let settings = GenerationSettings {
            max_attempts: 25,
            ..GenerationSettings::default()
        };
        let generator = PuzzleGenerator::new(&index, &list, settings);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            generator.generate(&mut rng, 4),
            Err(GenerationError::Exhausted { attempts: 25 })
        );
    }

    #[test]
    fn test_walks_back_to_the_start_are_discarded() {
        // Two six-letter words that only link to each other: every
        // three-word walk ends where it began.
        let list = words(&["aaaaaa", "aaaaab"]);
        let index = WordIndex::build(&list, Variant::Twist);
        let settings = GenerationSettings {
            max_attempts: 10,
            ..GenerationSettings::default()
        };
        let generator = PuzzleGenerator::new(&index, &list, settings);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            generator.generate(&mut rng, 3),
            Err(GenerationError::Exhausted { attempts: 10 })
        );
    }
}
