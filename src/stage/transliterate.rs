//! stage/transliterate.rs – **Word-level Haags spelling**
//! * Whole-word table first (`politie` → `pelisie`), else syllables + rule engine
//! * Result is recased to the original word (`Mijn` → `Mèn`, `LEKKER` → `LEKKÂH`)
//! * Words the rules leave alone keep their original token, borrowed and untouched
//! * Non-word and already translated tokens pass straight through
use crate::{
    case::{LetterCase, recase},
    context::{BackendPolicy, Context},
    phonetic::rewrite_word,
    stage::{Stage, StageError},
    syllable::{Syllables, syllabify},
    testing::stage_contract::StageTestConfig,
    token::Token,
};
use std::borrow::Cow;
use tracing::warn;

/// Public stage – zero-sized, stateless.
pub struct Transliterate;

impl Transliterate {
    /// Haags spelling of one lowercase word.
    pub fn word<'w>(&self, lower: &'w str, ctx: &Context<'w>) -> Result<Cow<'w, str>, StageError> {
        if let Some(replacement) = ctx.tables.word(lower) {
            return Ok(Cow::Borrowed(replacement));
        }
        let syllables = match syllabify(lower, ctx.hyphenator) {
            Ok(syllables) => syllables,
            Err(err) => match ctx.policy {
                BackendPolicy::Fail => {
                    return Err(StageError::Failed(self.name(), err.to_string()));
                }
                BackendPolicy::Fallback => {
                    warn!(word = lower, error = %err, "invalid hyphenation, using one syllable");
                    Syllables::single(lower)
                }
            },
        };
        Ok(Cow::Owned(rewrite_word(&syllables, ctx.tables)))
    }

    fn token<'a>(&self, token: Token<'a>, ctx: &Context<'_>) -> Result<Token<'a>, StageError> {
        if !token.is_word() {
            return Ok(token);
        }
        let rewritten = {
            let translation = self.word(token.lower(), ctx)?;
            if translation == token.lower() {
                None
            } else {
                let case = token.case().unwrap_or(LetterCase::Lower);
                Some(recase(&translation, case).into_owned())
            }
        };
        Ok(match rewritten {
            Some(value) => token.rewritten(value),
            None => token,
        })
    }
}

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, tokens: &[Token<'_>], _ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(tokens.iter().any(Token::is_word))
    }

    fn apply<'a>(
        &self,
        tokens: Vec<Token<'a>>,
        ctx: &Context<'_>,
    ) -> Result<Vec<Token<'a>>, StageError> {
        tokens.into_iter().map(|t| self.token(t, ctx)).collect()
    }
}

impl StageTestConfig for Transliterate {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("lekker", "lekkâh"),
            ("Mijn huis", "Mèn hùis"),
            ("Het is niet waar.", "Ut is nie waah."),
        ]
    }
}
