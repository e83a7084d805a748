//! Syllabification: split a word into onset/nucleus/coda records that know
//! their place in the word.

use crate::hyphenate::Hyphenate;
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

/// Dutch vowel spellings, longest first so `ooi` wins over `oo` and `o`.
pub const VOWELS: &[&str] = &[
    "eeuw", "ieuw", //
    "aai", "auw", "eeu", "ieu", "oei", "ooi", "ouw", //
    "aa", "au", "ee", "ei", "eu", "ie", "ij", "oe", "oo", "ou", "ui", "uu", //
    "a", "e", "i", "o", "u", "y", //
    "á", "à", "â", "ä", "é", "è", "ê", "ë", "í", "ï", "ó", "ô", "ö", "ú", "û", "ü",
];

/// Longest vowel spelling `text` starts with.
#[inline]
pub fn vowel_at(text: &str) -> Option<&'static str> {
    VOWELS.iter().copied().find(|v| text.starts_with(v))
}

/// Backend returned boundaries that do not partition the word.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyllabifyError {
    #[error("hyphenation of `{word}` gave offset {offset}, outside 1..{len}")]
    OutOfRange {
        word: String,
        offset: usize,
        len: usize,
    },
    #[error("hyphenation of `{word}` gave offset {offset} twice")]
    Duplicate { word: String, offset: usize },
    #[error("hyphenation of `{word}` gave offset {offset} after {previous}")]
    Unordered {
        word: String,
        previous: usize,
        offset: usize,
    },
}

/// One syllable of a word. All fields are slices of the lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'w> {
    pub value: &'w str,
    pub onset: &'w str,
    pub nucleus: &'w str,
    pub coda: &'w str,
    /// Everything in the word before this syllable.
    pub head: &'w str,
    /// Everything in the word after this syllable.
    pub tail: &'w str,
}

impl<'w> Syllable<'w> {
    /// Decompose `word[start..end]`.
    ///
    /// The nucleus is the first occurrence of the longest vowel spelling found.
    /// Without any vowel the whole syllable is the nucleus.
    pub fn new(word: &'w str, start: usize, end: usize) -> Self {
        let value = &word[start..end];
        let (onset, nucleus, coda) = VOWELS
            .iter()
            .find_map(|v| value.find(v).map(|at| (at, v.len())))
            .map(|(at, len)| (&value[..at], &value[at..at + len], &value[at + len..]))
            .unwrap_or(("", value, ""));
        Self {
            value,
            onset,
            nucleus,
            coda,
            head: &word[..start],
            tail: &word[end..],
        }
    }

    /// Nucleus plus coda.
    #[inline(always)]
    pub fn rime(&self) -> &'w str {
        &self.value[self.onset.len()..]
    }

    #[inline(always)]
    pub fn is_open(&self) -> bool {
        self.coda.is_empty()
    }

    #[inline(always)]
    pub fn is_initial(&self) -> bool {
        self.head.is_empty()
    }

    #[inline(always)]
    pub fn is_final(&self) -> bool {
        self.tail.is_empty()
    }
}

/// The ordered syllables of one word.
///
/// Neighbours are reached by index, so a syllable never owns or points at
/// another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllables<'w> {
    word: &'w str,
    items: SmallVec<[Syllable<'w>; 4]>,
}

impl<'w> Syllables<'w> {
    /// The whole word as one syllable.
    pub fn single(word: &'w str) -> Self {
        let items = if word.is_empty() {
            SmallVec::new()
        } else {
            smallvec![Syllable::new(word, 0, word.len())]
        };
        Self { word, items }
    }

    #[inline(always)]
    pub fn word(&self) -> &'w str {
        self.word
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Syllable<'w>> {
        self.items.get(index)
    }

    #[inline(always)]
    pub fn previous(&self, index: usize) -> Option<&Syllable<'w>> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    #[inline(always)]
    pub fn next(&self, index: usize) -> Option<&Syllable<'w>> {
        self.items.get(index + 1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable<'w>> {
        self.items.iter()
    }

    pub fn values(&self) -> Vec<&'w str> {
        self.items.iter().map(|s| s.value).collect()
    }
}

/// Split a lowercase word using `hyphenator` for the boundaries.
///
/// Boundaries must be strictly increasing character offsets in `1..len`;
/// anything else is a backend contract violation.
pub fn syllabify<'w>(
    word: &'w str,
    hyphenator: &dyn Hyphenate,
) -> Result<Syllables<'w>, SyllabifyError> {
    if word.is_empty() {
        return Ok(Syllables::single(word));
    }
    let offsets = hyphenator.hyphenate(word);
    let char_len = word.chars().count();

    let mut bounds: SmallVec<[usize; 8]> = smallvec![0];
    let mut previous = 0;
    for &offset in &offsets {
        if offset == 0 || offset >= char_len {
            return Err(SyllabifyError::OutOfRange {
                word: word.to_owned(),
                offset,
                len: char_len,
            });
        }
        if offset == previous {
            return Err(SyllabifyError::Duplicate {
                word: word.to_owned(),
                offset,
            });
        }
        if offset < previous {
            return Err(SyllabifyError::Unordered {
                word: word.to_owned(),
                previous,
                offset,
            });
        }
        bounds.push(offset);
        previous = offset;
    }
    bounds.push(char_len);

    // Character offsets → byte offsets, in one pass.
    let mut byte_bounds: SmallVec<[usize; 8]> = SmallVec::with_capacity(bounds.len());
    let mut wanted = bounds.iter().peekable();
    for (char_index, (byte_index, _)) in word.char_indices().enumerate() {
        while wanted.peek().is_some_and(|&&b| b == char_index) {
            wanted.next();
            byte_bounds.push(byte_index);
        }
    }
    byte_bounds.push(word.len());

    let items = byte_bounds
        .windows(2)
        .map(|pair| Syllable::new(word, pair[0], pair[1]))
        .collect();
    Ok(Syllables { word, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyphenate::{DutchHyphenator, Offsets};

    struct Fixed(&'static [usize]);

    impl Hyphenate for Fixed {
        fn hyphenate(&self, _word: &str) -> Offsets {
            Offsets::from_slice(self.0)
        }
    }

    #[test]
    fn vowel_table_is_longest_first() {
        for pair in VOWELS.windows(2) {
            assert!(
                pair[0].chars().count() >= pair[1].chars().count(),
                "{:?} listed before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn decomposes_onset_nucleus_coda() {
        let s = Syllable::new("schooier", 0, 6);
        assert_eq!(s.value, "schooi");
        assert_eq!(s.onset, "sch");
        assert_eq!(s.nucleus, "ooi");
        assert_eq!(s.coda, "");
        assert_eq!(s.tail, "er");
        assert!(s.is_open());
        assert!(s.is_initial());
        assert_eq!(s.rime(), "ooi");
    }

    #[test]
    fn vowelless_syllable_is_all_nucleus() {
        let s = Syllable::new("'t", 0, 2);
        assert_eq!(s.onset, "");
        assert_eq!(s.nucleus, "'t");
        assert_eq!(s.coda, "");
    }

    #[test]
    fn links_neighbours_by_index() {
        let syllables = syllabify("lekker", &DutchHyphenator::default()).unwrap();
        assert_eq!(syllables.values(), vec!["lek", "ker"]);
        assert_eq!(syllables.previous(1).map(|s| s.value), Some("lek"));
        assert_eq!(syllables.next(0).map(|s| s.value), Some("ker"));
        assert!(syllables.previous(0).is_none());
        assert!(syllables.next(1).is_none());
        let ker = syllables.get(1).unwrap();
        assert_eq!(ker.head, "lek");
        assert_eq!(ker.tail, "");
    }

    #[test]
    fn multibyte_boundaries() {
        let syllables = syllabify("reeën", &DutchHyphenator::default()).unwrap();
        assert_eq!(syllables.values(), vec!["ree", "ën"]);
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        let err = syllabify("lekker", &Fixed(&[0, 3])).unwrap_err();
        assert!(matches!(err, SyllabifyError::OutOfRange { offset: 0, .. }));
        let err = syllabify("lekker", &Fixed(&[6])).unwrap_err();
        assert!(matches!(err, SyllabifyError::OutOfRange { offset: 6, len: 6, .. }));
    }

    #[test]
    fn rejects_duplicates_and_disorder() {
        let err = syllabify("lekker", &Fixed(&[3, 3])).unwrap_err();
        assert_eq!(
            err,
            SyllabifyError::Duplicate {
                word: "lekker".into(),
                offset: 3
            }
        );
        let err = syllabify("lekker", &Fixed(&[4, 2])).unwrap_err();
        assert!(matches!(err, SyllabifyError::Unordered { previous: 4, offset: 2, .. }));
    }

    #[test]
    fn any_valid_partition_covers_the_word() {
        let syllables = syllabify("lekker", &Fixed(&[1, 2, 5])).unwrap();
        assert_eq!(syllables.values(), vec!["l", "e", "kke", "r"]);
        assert_eq!(syllables.values().concat(), "lekker");
    }
}
