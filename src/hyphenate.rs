//! Hyphenation backends.
//!
//! The syllabifier only needs interior split points for a lowercase word. Any
//! backend can be plugged in through [`Hyphenate`]; [`DutchHyphenator`] is the
//! built-in one.
//!
//! # Algorithm
//!
//! ```text
//! word → vowel groups (longest vowel spelling first: "ooi" before "oo")
//!      → consonant cluster between each pair of groups
//!      → split point inside the cluster:
//!          0 consonants   → between the vowels        (pi-a-no)
//!          1 consonant    → before it                 (da-gen)
//!          2 consonants   → between them              (lek-ker)
//!                           before an obstruent + l/r (ci-troen)
//!          3+ consonants  → before a legal onset pair (ven-ster), else before the last
//! ```
//!
//! `ch` and `sch` count as a single consonant. A `w` that closes a diphthong
//! (`ouw`, `eeuw`) moves to the next syllable when a vowel follows (`vrou-wen`).

use crate::syllable::vowel_at;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Split offsets are character offsets, strictly inside the word.
pub type Offsets = SmallVec<[usize; 8]>;

/// Minimum characters kept on either side of a split.
pub const MIN_MARGIN: usize = 1;

/// Clusters that may start a Dutch syllable.
const ONSET_PAIRS: &[&str] = &[
    "bl", "br", "dr", "fl", "fr", "gl", "gr", "kl", "kn", "kr", "pl", "pr", "schr", "sl", "sm",
    "sn", "sp", "st", "tr", "vl", "vr", "wr", "zw",
];

/// Consonants that may open a syllable in front of `l` or `r` (`ci-troen`, `ze-bra`).
const OBSTRUENTS: &[&str] = &["b", "c", "ch", "d", "f", "g", "k", "p", "t", "v", "w"];

/// Three-letter onsets checked before the pairs.
const ONSET_TRIPLES: &[&str] = &["spl", "spr", "str"];

/// Compounds and loans the cluster rules get wrong.
pub const DUTCH_EXCEPTIONS: &[&str] = &[
    "aard-ap-pel",
    "daar-om",
    "ko-nink-rijk",
    "voor-al",
    "waar-om",
    "waar-op",
];

/// Source of syllable boundaries for a lowercase word.
pub trait Hyphenate: Send + Sync {
    /// Interior split points as character offsets, ascending.
    fn hyphenate(&self, word: &str) -> Offsets;
}

/// Rule-based Dutch syllable splitter with an exception list.
#[derive(Debug, Clone)]
pub struct DutchHyphenator {
    exceptions: HashMap<String, Offsets>,
}

impl Default for DutchHyphenator {
    fn default() -> Self {
        Self::with_exceptions(DUTCH_EXCEPTIONS.iter().copied())
    }
}

impl DutchHyphenator {
    /// A splitter without exceptions: cluster rules only.
    pub fn new() -> Self {
        Self {
            exceptions: HashMap::new(),
        }
    }

    /// Exceptions use hyphen-delimited words, e.g. `"aard-ap-pel"`.
    pub fn with_exceptions<'e>(exceptions: impl IntoIterator<Item = &'e str>) -> Self {
        let exceptions = exceptions.into_iter().map(parse_exception).collect();
        Self { exceptions }
    }
}

impl Hyphenate for DutchHyphenator {
    fn hyphenate(&self, word: &str) -> Offsets {
        if let Some(offsets) = self.exceptions.get(word) {
            return offsets.clone();
        }
        let byte_splits = split_points(word);
        if byte_splits.is_empty() {
            return Offsets::new();
        }

        let char_len = word.chars().count();
        let mut offsets = Offsets::new();
        let mut splits = byte_splits.iter().peekable();
        for (char_index, (byte_index, _)) in word.char_indices().enumerate() {
            if splits.peek().is_some_and(|&&b| b == byte_index) {
                splits.next();
                if char_index >= MIN_MARGIN && char_index + MIN_MARGIN <= char_len {
                    offsets.push(char_index);
                }
            }
        }
        offsets
    }
}

/// Parse `"aard-ap-pel"` into `("aardappel", [4, 6])`.
fn parse_exception(exception: &str) -> (String, Offsets) {
    let mut word = String::with_capacity(exception.len());
    let mut offsets = Offsets::new();
    let mut char_count = 0usize;
    for c in exception.chars() {
        if c == '-' {
            offsets.push(char_count);
        } else {
            word.extend(c.to_lowercase());
            char_count += 1;
        }
    }
    (word, offsets)
}

/// Byte ranges of the vowel groups in `word`.
fn vowel_groups(word: &str) -> SmallVec<[(usize, usize); 8]> {
    let mut groups = SmallVec::new();
    let mut i = 0;
    while i < word.len() {
        let rest = &word[i..];
        match vowel_at(rest) {
            Some(vowel) => {
                let mut end = i + vowel.len();
                // A closing `w` belongs to the next syllable when a vowel follows.
                if vowel.len() > 1
                    && vowel.ends_with('w')
                    && vowel_at(&word[end..]).is_some()
                {
                    end -= 1;
                }
                groups.push((i, end));
                i = end;
            }
            None => i += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    groups
}

/// Consonant units of a cluster, with `sch` and `ch` kept whole.
fn consonant_units(cluster: &str) -> SmallVec<[&str; 6]> {
    let mut units = SmallVec::new();
    let mut rest = cluster;
    while let Some(c) = rest.chars().next() {
        let len = if rest.starts_with("sch") {
            3
        } else if rest.starts_with("ch") {
            2
        } else {
            c.len_utf8()
        };
        units.push(&rest[..len]);
        rest = &rest[len..];
    }
    units
}

/// Byte offset inside `cluster` where the next syllable starts.
fn split_in_cluster(cluster: &str) -> usize {
    let units = consonant_units(cluster);
    let keep = match units.len() {
        0 | 1 => 0,
        2 if OBSTRUENTS.contains(&units[0]) && matches!(units[1], "l" | "r") => 0,
        2 => 1,
        n => {
            let tail = |k: usize| units[n - k..].concat();
            if n >= 4 && ONSET_TRIPLES.contains(&tail(3).as_str()) {
                n - 3
            } else if ONSET_PAIRS.contains(&tail(2).as_str()) {
                n - 2
            } else {
                n - 1
            }
        }
    };
    units[..keep].iter().map(|u| u.len()).sum()
}

/// Interior split points of `word` as byte offsets.
fn split_points(word: &str) -> SmallVec<[usize; 8]> {
    let groups = vowel_groups(word);
    groups
        .windows(2)
        .map(|pair| {
            let (_, left_end) = pair[0];
            let (right_start, _) = pair[1];
            left_end + split_in_cluster(&word[left_end..right_start])
        })
        .collect()
}
