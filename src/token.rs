//! Lossless tokenizer.
//!
//! Every byte of the input ends up in exactly one token, in order, so
//! [`join_tokens`] over an untouched token stream gives back the input.

use crate::{
    case::{LetterCase, detect_case},
    unicode::{has_uppercase, is_punctuation, is_regular_word, is_word_char},
};
use regex::Regex;
use std::{borrow::Cow, iter::FusedIterator, sync::LazyLock};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+").expect("whitespace pattern is valid"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)*").expect("number pattern is valid"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:'[nrtNRT]\b|[\w-]+)").expect("word pattern is valid"));

/// Category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Whitespace,
    Number,
    Punctuation,
    /// Anything no matcher recognises (URLs, emoji, stray symbols).
    Other,
    /// Output of a multi-word contraction; never rewritten again.
    Translated,
}

impl TokenKind {
    /// One-byte code used in the contraction resolver's type-string.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        match self {
            TokenKind::Word => b'w',
            TokenKind::Whitespace => b' ',
            TokenKind::Number => b'1',
            TokenKind::Punctuation => b',',
            TokenKind::Other => b'_',
            TokenKind::Translated => b't',
        }
    }
}

/// A classified slice of the input, or the replacement text for one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    value: Cow<'a, str>,
    kind: TokenKind,
    case: Option<LetterCase>,
    lower: Cow<'a, str>,
}

impl<'a> Token<'a> {
    pub fn new(value: impl Into<Cow<'a, str>>, kind: TokenKind) -> Self {
        let value = value.into();
        let (case, lower) = if kind == TokenKind::Word {
            let lower = if has_uppercase(&value) {
                Cow::Owned(value.to_lowercase())
            } else {
                value.clone()
            };
            (Some(detect_case(&value)), lower)
        } else {
            (None, value.clone())
        };
        Self {
            value,
            kind,
            case,
            lower,
        }
    }

    /// A token produced by folding a phrase into its dialect form.
    pub fn translated(value: String) -> Self {
        Self::new(value, TokenKind::Translated)
    }

    /// A word token carrying rewritten text. The case of the original is kept.
    pub fn rewritten(&self, value: String) -> Self {
        let lower = value.to_lowercase();
        Self {
            value: Cow::Owned(value),
            kind: TokenKind::Word,
            case: self.case,
            lower: Cow::Owned(lower),
        }
    }

    #[inline(always)]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline(always)]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Casing of the original text. Only computed for words.
    #[inline(always)]
    pub fn case(&self) -> Option<LetterCase> {
        self.case
    }

    /// Lowercase form used for table lookups.
    #[inline(always)]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    #[inline(always)]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// True while the value is still a slice of the input text.
    #[inline(always)]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.value, Cow::Borrowed(_))
    }

    pub fn into_value(self) -> Cow<'a, str> {
        self.value
    }
}

/// Single forward pass over `text`, yielding tokens lazily.
///
/// Matchers are tried in priority order at the cursor: whitespace, number,
/// word, punctuation. Characters nobody claims are collected and flushed as one
/// `Other` token right before the next recognised token (or at the end).
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    junk_start: Option<usize>,
    queued: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            junk_start: None,
            queued: None,
        }
    }

    fn flush_junk(&mut self, end: usize) -> Option<Token<'a>> {
        let text = self.text;
        self.junk_start
            .take()
            .map(|start| Token::new(&text[start..end], TokenKind::Other))
    }
}

/// Length and kind of the token starting at the beginning of `rest`.
fn match_at(rest: &str) -> Option<(usize, TokenKind)> {
    if let Some(m) = WHITESPACE.find(rest) {
        return Some((m.end(), TokenKind::Whitespace));
    }
    if let Some(m) = NUMBER.find(rest) {
        let followed_by_word = rest[m.end()..].chars().next().is_some_and(is_word_char);
        if !followed_by_word {
            return Some((m.end(), TokenKind::Number));
        }
    }
    if let Some(m) = WORD.find(rest) {
        let kind = if is_regular_word(m.as_str()) {
            TokenKind::Word
        } else {
            TokenKind::Other
        };
        return Some((m.end(), kind));
    }
    rest.chars()
        .next()
        .filter(|&c| is_punctuation(c))
        .map(|c| (c.len_utf8(), TokenKind::Punctuation))
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }
        let text = self.text;
        while self.pos < text.len() {
            let start = self.pos;
            let rest = &text[start..];
            if let Some((len, kind)) = match_at(rest) {
                self.pos += len;
                let token = Token::new(&rest[..len], kind);
                return match self.flush_junk(start) {
                    Some(junk) => {
                        self.queued = Some(token);
                        Some(junk)
                    }
                    None => Some(token),
                };
            }
            self.junk_start.get_or_insert(start);
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        self.flush_junk(self.pos)
    }
}

impl<'a> FusedIterator for Tokenizer<'a> {}

/// Split `text` into a lazy, lossless token stream.
#[inline]
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

/// Concatenate token values back into text.
pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.value().len()).sum());
    for token in tokens {
        out.push_str(token.value());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(String, TokenKind)> {
        tokenize(text)
            .map(|t| (t.value().to_owned(), t.kind()))
            .collect()
    }

    #[test]
    fn sample_sentence() {
        let input = "'t duurde 3,14 lange,    bange dagen.";
        let tokens: Vec<_> = tokenize(input).collect();
        assert_eq!(join_tokens(&tokens), input);
        assert_eq!(tokens.len(), 13);
        assert_eq!(tokens[0].value(), "'t");
        assert_eq!(tokens[0].kind(), TokenKind::Word);
        assert_eq!(tokens[1].kind(), TokenKind::Whitespace);
        assert_eq!(tokens[2].value(), "duurde");
        assert_eq!(tokens[4].kind(), TokenKind::Number);
        assert_eq!(tokens[4].value(), "3,14");
        assert_eq!(tokens[7].value(), ",");
        assert_eq!(tokens[7].kind(), TokenKind::Punctuation);
    }

    #[test]
    fn irregular_words_become_other() {
        assert_eq!(
            kinds("mp3 e-mail"),
            vec![
                ("mp3".to_owned(), TokenKind::Other),
                (" ".to_owned(), TokenKind::Whitespace),
                ("e-mail".to_owned(), TokenKind::Other),
            ]
        );
    }

    #[test]
    fn number_glued_to_letters_is_not_a_number() {
        let tokens = kinds("3d");
        assert_eq!(tokens, vec![("3d".to_owned(), TokenKind::Other)]);
    }

    #[test]
    fn junk_is_flushed_as_one_token() {
        let tokens = kinds("hoi @#~ daar");
        assert_eq!(
            tokens,
            vec![
                ("hoi".to_owned(), TokenKind::Word),
                (" ".to_owned(), TokenKind::Whitespace),
                ("@#~".to_owned(), TokenKind::Other),
                (" ".to_owned(), TokenKind::Whitespace),
                ("daar".to_owned(), TokenKind::Word),
            ]
        );
    }

    #[test]
    fn trailing_junk_is_flushed_at_end() {
        let tokens = kinds("hoi😀😀");
        assert_eq!(
            tokens,
            vec![
                ("hoi".to_owned(), TokenKind::Word),
                ("😀😀".to_owned(), TokenKind::Other),
            ]
        );
    }

    #[test]
    fn shorthand_needs_a_word_boundary() {
        let tokens = kinds("'tis");
        assert_eq!(tokens[0], ("'".to_owned(), TokenKind::Punctuation));
        assert_eq!(tokens[1], ("tis".to_owned(), TokenKind::Word));
    }

    #[test]
    fn word_tokens_carry_case_and_lowercase() {
        let tokens: Vec<_> = tokenize("IJsland WAT").collect();
        assert_eq!(tokens[0].case(), Some(LetterCase::Sentence));
        assert_eq!(tokens[0].lower(), "ijsland");
        assert_eq!(tokens[2].case(), Some(LetterCase::Upper));
        assert_eq!(tokens[1].case(), None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut tokenizer = tokenize("");
        assert!(tokenizer.next().is_none());
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn url_survives_round_trip() {
        let input = "De informatie is te vinden op http://example.org/een/of/andere/pagina.html.";
        let tokens: Vec<_> = tokenize(input).collect();
        assert_eq!(join_tokens(&tokens), input);
        assert!(tokens.iter().all(Token::is_borrowed));
    }
}
