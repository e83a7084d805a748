//! Letter-case detection and re-application.
//!
//! Dutch treats the digraph `ij` as a single letter when capitalising
//! (`IJsland`, never `Ijsland`). Both directions therefore swap the digraph for
//! the Unicode ligature `Ĳ`/`ĳ` before looking at case, and swap it back
//! afterwards, so the ligature behaves as one titlecase-able letter.

use std::borrow::Cow;

const IJ_UPPER: char = 'Ĳ';
const IJ_LOWER: char = 'ĳ';

/// Casing pattern of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// `lekker`
    Lower,
    /// `LEKKER`
    Upper,
    /// `Lekker ding`
    Sentence,
    /// `Lekker Ding`
    Title,
    /// Anything else (`BrEeZâH`). Detected, never applied.
    Other,
}

impl LetterCase {
    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            LetterCase::Lower => "lower",
            LetterCase::Upper => "upper",
            LetterCase::Sentence => "sentence",
            LetterCase::Title => "title",
            LetterCase::Other => "other",
        }
    }
}

/// Replace the `IJ`/`ij` digraphs by their ligature.
///
/// Returns `None` when there is nothing to fold, or when the text already
/// contains a ligature (in which case unfolding would not round-trip).
fn fold_ij(text: &str) -> Option<String> {
    if text.contains(|c| c == IJ_UPPER || c == IJ_LOWER) {
        return None;
    }
    if !text.contains("IJ") && !text.contains("ij") {
        return None;
    }
    Some(text.replace("IJ", "Ĳ").replace("ij", "ĳ"))
}

fn unfold_ij(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            IJ_UPPER => out.push_str("IJ"),
            IJ_LOWER => out.push_str("ij"),
            _ => out.push(c),
        }
    }
    out
}

fn is_sentence(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest = chars.as_str();
            rest == rest.to_lowercase()
        }
        _ => false,
    }
}

/// Uppercase every letter that follows a non-letter, lowercase the others.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Classify the casing of `text`.
///
/// Checks run in a fixed order: upper, lower, sentence, title, other.
pub fn detect_case(text: &str) -> LetterCase {
    let folded = fold_ij(text);
    let text = folded.as_deref().unwrap_or(text);

    if text == text.to_uppercase() {
        LetterCase::Upper
    } else if text == text.to_lowercase() {
        LetterCase::Lower
    } else if is_sentence(text) {
        LetterCase::Sentence
    } else if text == title_case(text) {
        LetterCase::Title
    } else {
        LetterCase::Other
    }
}

/// Apply `case` to `text`. Borrowed when nothing changes.
///
/// `LetterCase::Other` carries no pattern to apply and leaves `text` alone.
pub fn recase(text: &str, case: LetterCase) -> Cow<'_, str> {
    let out = match case {
        LetterCase::Other => return Cow::Borrowed(text),
        LetterCase::Lower => text.to_lowercase(),
        LetterCase::Upper => text.to_uppercase(),
        LetterCase::Sentence | LetterCase::Title => {
            let folded = fold_ij(text);
            let source = folded.as_deref().unwrap_or(text);
            let cased = if case == LetterCase::Sentence {
                sentence_case(source)
            } else {
                title_case(source)
            };
            if folded.is_some() {
                unfold_ij(&cased)
            } else {
                cased
            }
        }
    };
    if out == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(out)
    }
}
