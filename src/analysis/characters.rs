/*!
 * Character detection and tiering.
 *
 * Detection is a capitalization heuristic: sequences of one or two capitalized
 * words, filtered against a stop-list of common sentence-initial words,
 * pronouns and bare titles. Sentence-initial common words still slip through
 * as false positives; that is the documented behavior of the heuristic, not a
 * bug to patch around.
 *
 * The registry keys names by their lower-cased form and keeps the first-seen
 * casing as the canonical display name. Tiers are recomputed from cumulative
 * counts on every read, never cached, so merging counts from chunked runs
 * needs no reconciliation.
 */

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::plan::Character;

/// One or two capitalized words in sequence, the proper-noun candidate shape.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b").expect("Invalid name regex")
});

/// Common words excluded from character detection.
static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
        "be", "have", "has", "had", "do", "does", "did", "will", "would",
        "could", "should", "may", "might", "must", "shall", "can", "need",
        "he", "she", "it", "they", "we", "you", "i", "me", "him", "her",
        "his", "hers", "its", "their", "our", "your", "my", "this", "that",
        "these", "those", "then", "than", "when", "where", "what", "who",
        "which", "how", "why", "all", "each", "every", "both", "few", "more",
        "most", "other", "some", "such", "no", "not", "only", "own", "same",
        "so", "just", "now", "here", "there", "also", "very", "even", "back",
        "well", "way", "long", "little", "good", "new", "first", "last",
        "great", "old", "young", "right", "big", "high", "small", "large",
        "next", "early", "late", "still", "never", "always", "often", "once",
        "upon", "time", "day", "night", "year", "years", "hand", "hands",
        "eyes", "face", "head", "man", "woman", "people", "thing", "things",
        "place", "world", "life", "room", "door", "house", "home", "city",
        "chapter", "part", "one", "two", "three", "four", "five", "six",
        "seven", "eight", "nine", "ten", "said", "asked", "told", "thought",
        "looked", "saw", "knew", "felt", "made", "came", "went", "got",
        "took", "gave", "found", "called", "seemed", "left", "turned",
        "began", "keep", "let", "put", "set", "show", "try", "ask", "tell",
        "think", "call", "hear", "mean", "hold", "stand", "turn",
        "move", "live", "believe", "bring", "happen", "write", "sit", "wait",
        "end", "moment", "finally", "suddenly", "something", "anything",
        "everything", "nothing", "someone", "anyone", "everyone", "maybe",
        "perhaps", "almost", "already", "really", "actually", "probably",
    ])
});

/// Bare titles that are not names on their own.
static TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "lady", "lord",
        "king", "queen", "prince", "princess",
    ])
});

/// Per-name accumulated state, keyed externally by the lower-cased name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEntry {
    /// First-seen casing, used for display
    pub canonical_name: String,

    /// Cumulative mention count across all observed scenes
    pub mention_count: usize,
}

/// Accumulating registry of detected character names.
///
/// Serializable so chunked runs can carry it between merge calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterRegistry {
    entries: HashMap<String, CharacterEntry>,
}

impl CharacterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with a custom character list.
    ///
    /// Seeded names are guaranteed a presence in the output even at zero
    /// detected mentions, with the supplied casing as canonical.
    pub fn with_profile(names: &[String]) -> Self {
        let mut registry = Self::new();
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            registry
                .entries
                .entry(name.to_lowercase())
                .or_insert_with(|| CharacterEntry {
                    canonical_name: name.to_string(),
                    mention_count: 0,
                });
        }
        registry
    }

    /// Scan one scene text and accumulate mention counts.
    pub fn observe(&mut self, text: &str) {
        for capture in NAME_PATTERN.find_iter(text) {
            let candidate = capture.as_str();
            let lowered = candidate.to_lowercase();

            if candidate.chars().count() <= 2 {
                continue;
            }
            if COMMON_WORDS.contains(lowered.as_str()) || TITLES.contains(lowered.as_str()) {
                continue;
            }

            self.entries
                .entry(lowered)
                .and_modify(|entry| entry.mention_count += 1)
                .or_insert_with(|| CharacterEntry {
                    canonical_name: candidate.to_string(),
                    mention_count: 1,
                });
        }
    }

    /// Number of distinct names observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names have been observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialize the character list, tiered from current cumulative counts.
    ///
    /// Sorted by mention count descending, then lower-cased name ascending
    /// for a stable order.
    pub fn characters(&self) -> Vec<Character> {
        let mut keyed: Vec<(&String, &CharacterEntry)> = self.entries.iter().collect();
        keyed.sort_by(|(key_a, entry_a), (key_b, entry_b)| {
            entry_b
                .mention_count
                .cmp(&entry_a.mention_count)
                .then_with(|| key_a.cmp(key_b))
        });

        keyed
            .into_iter()
            .map(|(_, entry)| {
                Character::from_mentions(entry.canonical_name.clone(), entry.mention_count)
            })
            .collect()
    }
}
