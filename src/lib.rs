pub mod case;
pub mod context;
pub mod haags;
pub mod hyphenate;
pub mod phonetic;
pub mod pipeline;
pub mod stage;
pub mod syllable;
pub mod tables;
pub mod testing;
pub mod token;
pub mod unicode;

pub use case::{LetterCase, detect_case, recase};
pub use context::{BackendPolicy, Context};
pub use haags::{Haags, HaagsBuilder, HaagsError};
pub use hyphenate::{DutchHyphenator, Hyphenate};
pub use stage::contract::Contract;
pub use stage::transliterate::Transliterate;
pub use stage::{Stage, StageError};
pub use syllable::{Syllable, SyllabifyError, Syllables, syllabify};
pub use tables::{TableError, Tables, TablesBuilder};
pub use token::{Token, TokenKind, Tokenizer, join_tokens, tokenize};

use std::sync::LazyLock;
use tracing::warn;

static DEFAULT: LazyLock<Haags> = LazyLock::new(Haags::default);

/// Translate Dutch text to Haags with the built-in tables.
///
/// Never fails: with the default [`BackendPolicy::Fallback`] a bad
/// hyphenation only degrades one word.
pub fn translate(text: &str) -> String {
    match DEFAULT.translate(text) {
        Ok(translated) => translated,
        Err(err) => {
            warn!(error = %err, "translation failed, returning input unchanged");
            text.to_owned()
        }
    }
}
