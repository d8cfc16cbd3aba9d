//! Transformation adjacency over a word list.
//!
//! Both variants are built in two passes: words are grouped under a key
//! (sorted-letter signature for shrink, wildcard key for twist), then each
//! word's successor list is materialized from those groups. Successor lists
//! are ordered multisets; duplicates are kept because random walks choose
//! from them uniformly and the duplicates weight the choice.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// Game variant: which single-step transformation links two words.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Drop one letter, rearranging freely.
    Shrink,
    /// Change one letter in place.
    Twist,
}

impl Variant {
    /// Title used to prefix announcements.
    pub fn title(self) -> &'static str {
        match self {
            Variant::Shrink => "WordShrink",
            Variant::Twist => "WordTwist",
        }
    }

    /// Chat command that starts this variant.
    pub fn command(self) -> &'static str {
        match self {
            Variant::Shrink => "wordshrink",
            Variant::Twist => "wordtwist",
        }
    }
}

const WILDCARD: char = '*';

/// Read-only successor lookup for one variant.
///
/// Words sharing a successor list (shrink anagrams) point at the same slot.
#[derive(Debug, Clone)]
pub struct WordIndex {
    variant: Variant,
    slots: HashMap<String, usize>,
    lists: Vec<Vec<String>>,
}

impl WordIndex {
    /// Builds the adjacency index for `variant` over `words`.
    #[instrument(skip(words), fields(words = words.len()))]
    pub fn build(words: &[String], variant: Variant) -> Self {
        let index = match variant {
            Variant::Shrink => build_shrink(words),
            Variant::Twist => build_twist(words),
        };
        debug!(
            words = index.slots.len(),
            lists = index.lists.len(),
            edges = index.lists.iter().map(Vec::len).sum::<usize>(),
            "Built word index"
        );
        index
    }

    /// Variant this index was built for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Successors of `word`; empty for words with none and for unknown words.
    pub fn successors(&self, word: &str) -> &[String] {
        self.slots
            .get(word)
            .map(|&slot| self.lists[slot].as_slice())
            .unwrap_or(&[])
    }

    /// Whether `to` is a single step from `from`.
    pub fn is_edge(&self, from: &str, to: &str) -> bool {
        self.successors(from).iter().any(|w| w == to)
    }
}

/// Sorted-letter signature of a word.
pub fn signature(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort();
    letters.into_iter().collect()
}

/// `word` with position `pos` blanked out.
pub fn wildcard_key(word: &str, pos: usize) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| if i == pos { WILDCARD } else { c })
        .collect()
}

fn build_shrink(words: &[String]) -> WordIndex {
    let mut by_signature: HashMap<String, Vec<&str>> = HashMap::new();
    for word in words {
        by_signature.entry(signature(word)).or_default().push(word);
    }

    let mut slot_of_signature: HashMap<String, usize> = HashMap::new();
    let mut slots = HashMap::with_capacity(words.len());
    let mut lists = Vec::new();
    for word in words {
        let slot = match slot_of_signature.entry(signature(word)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let letters: Vec<char> = entry.key().chars().collect();
                let mut successors = Vec::new();
                // Removing different positions may give the same shorter
                // signature; each removal contributes its group again.
                for skip in 0..letters.len() {
                    let shorter: String = letters
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, &c)| c)
                        .collect();
                    if let Some(group) = by_signature.get(&shorter) {
                        successors.extend(group.iter().map(|w| w.to_string()));
                    }
                }
                lists.push(successors);
                *entry.insert(lists.len() - 1)
            }
        };
        slots.insert(word.clone(), slot);
    }

    WordIndex {
        variant: Variant::Shrink,
        slots,
        lists,
    }
}

fn build_twist(words: &[String]) -> WordIndex {
    let mut by_key: HashMap<String, Vec<&str>> = HashMap::new();
    for word in words {
        for pos in 0..word.chars().count() {
            by_key.entry(wildcard_key(word, pos)).or_default().push(word);
        }
    }

    let mut slots = HashMap::with_capacity(words.len());
    let mut lists = Vec::new();
    for word in words {
        if slots.contains_key(word) {
            continue;
        }
        let mut successors = Vec::new();
        for pos in 0..word.chars().count() {
            if let Some(group) = by_key.get(&wildcard_key(word, pos)) {
                successors.extend(
                    group
                        .iter()
                        .filter(|&&w| w != word.as_str())
                        .map(|w| w.to_string()),
                );
            }
        }
        lists.push(successors);
        slots.insert(word.clone(), lists.len() - 1);
    }

    WordIndex {
        variant: Variant::Twist,
        slots,
        lists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(list: &[String]) -> Vec<&str> {
        let mut v: Vec<&str> = list.iter().map(String::as_str).collect();
        v.sort();
        v
    }

    #[test]
    fn test_signature_sorts_letters() {
        assert_eq!(signature("stone"), "enost");
        assert_eq!(signature(""), "");
    }

    #[test]
    fn test_wildcard_key_blanks_one_position() {
        assert_eq!(wildcard_key("cat", 0), "*at");
        assert_eq!(wildcard_key("cat", 2), "ca*");
    }

    #[test]
    fn test_twist_links_single_substitutions() {
        let index = WordIndex::build(
            &words(&["cat", "cot", "cog", "dog", "dot"]),
            Variant::Twist,
        );
        assert_eq!(sorted(index.successors("cat")), vec!["cot"]);
        assert_eq!(sorted(index.successors("cot")), vec!["cat", "cog", "dot"]);
        assert_eq!(sorted(index.successors("dog")), vec!["cog", "dot"]);
    }

    #[test]
    fn test_twist_is_symmetric_without_self_loops() {
        let list = words(&["cats", "cars", "bars", "bard", "card", "cart", "bart", "cats"]);
        let index = WordIndex::build(&list, Variant::Twist);
        for a in &list {
            assert!(!index.is_edge(a, a), "{} links to itself", a);
            for b in index.successors(a) {
                assert!(index.is_edge(b, a), "{} -> {} not mirrored", a, b);
                let diff = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
                assert_eq!(diff, 1);
                assert_eq!(a.len(), b.len());
            }
        }
    }

    #[test]
    fn test_shrink_links_one_letter_removals() {
        let index = WordIndex::build(
            &words(&["stone", "notes", "tones", "note", "tone", "one", "ton"]),
            Variant::Shrink,
        );
        assert_eq!(sorted(index.successors("stone")), vec!["note", "tone"]);
        assert_eq!(sorted(index.successors("notes")), vec!["note", "tone"]);
        assert_eq!(sorted(index.successors("note")), vec!["one", "ton"]);
        assert!(index.successors("one").is_empty());
    }

    #[test]
    fn test_shrink_successors_are_sub_multisets() {
        let list = words(&[
            "planet", "plane", "plate", "panel", "penal", "plan", "pale", "leap", "peal", "ale",
            "lap",
        ]);
        let index = WordIndex::build(&list, Variant::Shrink);
        for a in &list {
            for b in index.successors(a) {
                assert_eq!(b.len() + 1, a.len());
                let mut remaining: Vec<char> = a.chars().collect();
                for c in b.chars() {
                    let pos = remaining.iter().position(|&r| r == c);
                    assert!(pos.is_some(), "{} is not inside {}", b, a);
                    remaining.remove(pos.unwrap());
                }
                assert_eq!(remaining.len(), 1);
            }
        }
    }

    #[test]
    fn test_shrink_keeps_duplicate_successors_from_repeated_letters() {
        // "toot" -> remove either 't' or either 'o' gives the same signature twice.
        let index = WordIndex::build(&words(&["toot", "tot", "too"]), Variant::Shrink);
        let successors = index.successors("toot");
        assert_eq!(successors.iter().filter(|w| *w == "tot").count(), 2);
        assert_eq!(successors.iter().filter(|w| *w == "too").count(), 2);
    }

    #[test]
    fn test_unknown_and_isolated_words_have_no_successors() {
        let index = WordIndex::build(&words(&["cat", "xylophone"]), Variant::Twist);
        assert!(index.successors("xylophone").is_empty());
        assert!(index.successors("nothing").is_empty());
        assert!(!index.is_edge("nothing", "cat"));
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Shrink.to_string(), "shrink");
        assert_eq!("twist".parse::<Variant>().unwrap(), Variant::Twist);
        assert_eq!(Variant::Twist.title(), "WordTwist");
        assert_eq!(Variant::Shrink.command(), "wordshrink");
    }
}
