pub mod data;

use regex::Regex;
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};
use thiserror::Error;

static BUILTIN: LazyLock<Arc<Tables>> = LazyLock::new(|| {
    Arc::new(
        Tables::builder()
            .with_builtin()
            .build()
            .expect("built-in tables are valid"),
    )
});

/// Lookup-table misconfiguration, caught when the tables are built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("empty key in the {0} table")]
    EmptyKey(&'static str),
    #[error("malformed key `{key}` in the {table} table")]
    MalformedPhrase { table: &'static str, key: String },
    #[error("key `{key}` in the {table} table is not lowercase")]
    NotLowercase { table: &'static str, key: String },
    #[error("syllable key `{0}` spans more than two syllables")]
    TooManySyllables(String),
}

/// All phrases of one word count, with the matcher that finds candidate runs
/// of that many words in a token type-string.
#[derive(Debug, Clone)]
pub struct ContractionGroup {
    words: usize,
    matcher: Regex,
    phrases: HashMap<String, String>,
}

impl ContractionGroup {
    fn new(words: usize) -> Self {
        // `w` per word, single whitespace between, then whitespace or `, `.
        let mut pattern = String::from("w");
        for _ in 1..words {
            pattern.push_str(" w");
        }
        pattern.push_str("(?: |, )");
        let matcher = Regex::new(&pattern).expect("contraction pattern is valid");
        Self {
            words,
            matcher,
            phrases: HashMap::new(),
        }
    }

    #[inline(always)]
    pub fn words(&self) -> usize {
        self.words
    }

    #[inline(always)]
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    #[inline]
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// The three read-only lookup tables shared by every translation.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Ordered by word count, longest first.
    contractions: Vec<ContractionGroup>,
    words: HashMap<String, String>,
    syllables: HashMap<String, String>,
    /// First syllable → (second syllable, replacement).
    syllable_pairs: HashMap<String, Vec<(String, String)>>,
}

impl Tables {
    pub fn builder() -> TablesBuilder {
        TablesBuilder::default()
    }

    /// The built-in Haags tables, validated once per process.
    pub fn builtin() -> Arc<Tables> {
        Arc::clone(&*BUILTIN)
    }

    pub(crate) fn builtin_ref() -> &'static Tables {
        &**BUILTIN
    }

    #[inline(always)]
    pub fn contractions(&self) -> &[ContractionGroup] {
        &self.contractions
    }

    /// Fewest words any contraction has, if there are any.
    pub fn shortest_contraction(&self) -> Option<usize> {
        self.contractions.last().map(ContractionGroup::words)
    }

    #[inline]
    pub fn word(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    #[inline]
    pub fn syllable(&self, syllable: &str) -> Option<&str> {
        self.syllables.get(syllable).map(String::as_str)
    }

    /// Replacement for two adjacent syllables taken together.
    #[inline]
    pub fn syllable_pair(&self, first: &str, second: &str) -> Option<&str> {
        self.syllable_pairs
            .get(first)?
            .iter()
            .find(|(s, _)| s == second)
            .map(|(_, replacement)| replacement.as_str())
    }
}

/// Collects entries and validates them into [`Tables`].
#[derive(Debug, Clone, Default)]
pub struct TablesBuilder {
    contractions: Vec<(String, String)>,
    words: Vec<(String, String)>,
    syllables: Vec<(String, String)>,
}

impl TablesBuilder {
    /// Start from the built-in entries. Later entries with the same key win.
    pub fn with_builtin(self) -> Self {
        self.contractions(data::CONTRACTIONS.entries().map(|(k, v)| (*k, *v)))
            .words(data::WORDS.entries().map(|(k, v)| (*k, *v)))
            .syllables(data::SYLLABLES.entries().map(|(k, v)| (*k, *v)))
    }

    pub fn contraction(mut self, phrase: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.contractions.push((phrase.into(), replacement.into()));
        self
    }

    pub fn contractions<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.contractions
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn word(mut self, word: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.words.push((word.into(), replacement.into()));
        self
    }

    pub fn words<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.words
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn syllable(mut self, syllable: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.syllables.push((syllable.into(), replacement.into()));
        self
    }

    pub fn syllables<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.syllables
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> Result<Tables, TableError> {
        let mut tables = Tables::default();

        let mut groups: HashMap<usize, ContractionGroup> = HashMap::new();
        for (phrase, replacement) in self.contractions {
            let words = validate_phrase(&phrase)?;
            groups
                .entry(words)
                .or_insert_with(|| ContractionGroup::new(words))
                .phrases
                .insert(phrase, replacement);
        }
        tables.contractions = groups.into_values().collect();
        tables
            .contractions
            .sort_unstable_by(|a, b| b.words.cmp(&a.words));

        for (word, replacement) in self.words {
            validate_key("word", &word)?;
            if word.chars().any(char::is_whitespace) {
                return Err(TableError::MalformedPhrase {
                    table: "word",
                    key: word,
                });
            }
            tables.words.insert(word, replacement);
        }

        for (key, replacement) in self.syllables {
            validate_key("syllable", &key)?;
            if key.matches('-').count() > 1 {
                return Err(TableError::TooManySyllables(key));
            }
            let malformed = key
                .split('-')
                .any(|p| p.is_empty() || p.chars().any(char::is_whitespace));
            if malformed {
                return Err(TableError::MalformedPhrase {
                    table: "syllable",
                    key,
                });
            }
            match key.split_once('-') {
                Some((first, second)) => {
                    let pairs = tables.syllable_pairs.entry(first.to_owned()).or_default();
                    pairs.retain(|(s, _)| s != second);
                    pairs.push((second.to_owned(), replacement));
                }
                None => {
                    tables.syllables.insert(key, replacement);
                }
            }
        }

        Ok(tables)
    }
}

fn validate_key(table: &'static str, key: &str) -> Result<(), TableError> {
    if key.trim().is_empty() {
        return Err(TableError::EmptyKey(table));
    }
    if key != key.to_lowercase() {
        return Err(TableError::NotLowercase {
            table,
            key: key.to_owned(),
        });
    }
    Ok(())
}

/// Validate a contraction key and return its word count.
fn validate_phrase(phrase: &str) -> Result<usize, TableError> {
    validate_key("contraction", phrase)?;
    let mut words = 0;
    for word in phrase.split(' ') {
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(TableError::MalformedPhrase {
                table: "contraction",
                key: phrase.to_owned(),
            });
        }
        words += 1;
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        let tables = Tables::builtin();
        assert_eq!(tables.word("het"), Some("ut"));
        assert_eq!(tables.syllable("tie"), Some("sie"));
        assert_eq!(tables.syllable_pair("lij", "ke"), Some("luke"));
        assert_eq!(tables.syllable_pair("lij", "kerst"), None);
        assert!(tables.word("wat").is_none());
    }

    #[test]
    fn groups_are_longest_first() {
        let tables = Tables::builtin();
        let counts: Vec<usize> = tables.contractions().iter().map(|g| g.words()).collect();
        assert_eq!(counts, vec![3, 2]);
        assert_eq!(tables.shortest_contraction(), Some(2));
        assert_eq!(tables.contractions()[0].get("dacht het niet"), Some("dachutnie"));
        assert_eq!(tables.contractions()[1].get("van jou"), Some("vajjâh"));
    }

    #[test]
    fn group_matcher_shape() {
        let group = ContractionGroup::new(2);
        assert!(group.matcher().is_match("w w "));
        assert!(group.matcher().is_match("w w, "));
        assert!(!group.matcher().is_match("w w."));
        assert!(!group.matcher().is_match("w,w "));
    }

    #[test]
    fn rejects_bad_contraction_keys() {
        let err = Tables::builder().contraction("  ", "x").build().unwrap_err();
        assert_eq!(err, TableError::EmptyKey("contraction"));

        let err = Tables::builder().contraction("ken  ik", "x").build().unwrap_err();
        assert!(matches!(err, TableError::MalformedPhrase { .. }));

        let err = Tables::builder().contraction(" ken ik", "x").build().unwrap_err();
        assert!(matches!(err, TableError::MalformedPhrase { .. }));

        let err = Tables::builder().contraction("Ken ik", "x").build().unwrap_err();
        assert!(matches!(err, TableError::NotLowercase { table: "contraction", .. }));
    }

    #[test]
    fn rejects_bad_syllable_keys() {
        let err = Tables::builder().syllable("a-b-c", "x").build().unwrap_err();
        assert_eq!(err, TableError::TooManySyllables("a-b-c".into()));

        let err = Tables::builder().syllable("-ke", "x").build().unwrap_err();
        assert!(matches!(err, TableError::MalformedPhrase { table: "syllable", .. }));

        let err = Tables::builder().word("twee woorden", "x").build().unwrap_err();
        assert!(matches!(err, TableError::MalformedPhrase { table: "word", .. }));
    }

    #[test]
    fn later_entries_override_builtin() {
        let tables = Tables::builder()
            .with_builtin()
            .word("het", "ut!")
            .syllable("lij-ke", "lukke")
            .build()
            .unwrap();
        assert_eq!(tables.word("het"), Some("ut!"));
        assert_eq!(tables.syllable_pair("lij", "ke"), Some("lukke"));
    }

    #[test]
    fn empty_builder_builds_empty_tables() {
        let tables = Tables::builder().build().unwrap();
        assert!(tables.contractions().is_empty());
        assert_eq!(tables.shortest_contraction(), None);
    }
}
