//! Character classes shared by the tokenizer and the case model.

/// Sentence terminators.
const TERMINATORS: &[char] = &['.', '!', '?', '…'];

/// Clause separators.
const SEPARATORS: &[char] = &[',', ';', ':'];

/// Straight, curly and guillemet quotes.
const QUOTES: &[char] = &['\'', '"', '‘', '’', '‚', '“', '”', '„', '«', '»', '‹', '›'];

/// Brackets and the odd typographic symbol that shows up in running text.
const MISC: &[char] = &['(', ')', '[', ']', '{', '}', '–', '—', '/', '&', '*', '%', '•'];

/// Shorthand article/pronoun forms that count as words despite the apostrophe.
pub const SHORTHAND_FORMS: &[&str] = &["'n", "'r", "'t"];

/// Is `c` one of the punctuation characters the tokenizer recognises?
#[inline(always)]
pub fn is_punctuation(c: char) -> bool {
    TERMINATORS.contains(&c) || SEPARATORS.contains(&c) || QUOTES.contains(&c) || MISC.contains(&c)
}

/// Characters that may continue a word (`\w` in regex terms).
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word is "regular" when it is purely alphabetic or one of the shorthand forms.
/// Anything else (URLs, identifiers, `a-b` compounds) is passed through untouched.
#[inline]
pub fn is_regular_word(word: &str) -> bool {
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        return true;
    }
    SHORTHAND_FORMS
        .iter()
        .any(|form| form.eq_ignore_ascii_case(word))
}

/// Does `text` contain any uppercase letter?
#[inline]
pub fn has_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_set() {
        for c in ['.', ',', '?', '!', '…', '"', '«', '(', '—'] {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
        for c in ['a', '3', ' ', '@', '#', '😀'] {
            assert!(!is_punctuation(c), "{c:?} should not be punctuation");
        }
    }

    #[test]
    fn regular_words() {
        assert!(is_regular_word("lekker"));
        assert!(is_regular_word("IJsland"));
        assert!(is_regular_word("één"));
        assert!(is_regular_word("'t"));
        assert!(is_regular_word("'T"));
        assert!(!is_regular_word("mp3"));
        assert!(!is_regular_word("snake_case"));
        assert!(!is_regular_word("e-mail"));
        assert!(!is_regular_word(""));
    }
}
