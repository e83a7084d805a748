//! stage/contract.rs – **Multi-word contractions**
//! * `ken ik` → `kennik`, `dacht het niet` → `dachutnie`
//! * Longest phrases first, matches never overlap
//! * The replacement takes the case of the phrase's first word
//! * Folded phrases become `Translated` tokens and are never matched again
use crate::{
    case::{LetterCase, recase},
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
    token::{Token, TokenKind},
};
use std::iter::once;
use tracing::debug;

/// Public stage – zero-sized, stateless. Reads its phrases from the context.
pub struct Contract;

/// One code per token, as used by the phrase matchers.
fn type_string(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| char::from(t.kind().code())).collect()
}

fn boundary<'a>() -> Token<'a> {
    Token::new(" ", TokenKind::Whitespace)
}

impl Stage for Contract {
    fn name(&self) -> &'static str {
        "contract"
    }

    #[inline(always)]
    fn needs_apply(&self, tokens: &[Token<'_>], ctx: &Context<'_>) -> Result<bool, StageError> {
        let Some(shortest) = ctx.tables.shortest_contraction() else {
            return Ok(false);
        };
        Ok(tokens.iter().filter(|t| t.is_word()).count() >= shortest)
    }

    fn apply<'a>(
        &self,
        tokens: Vec<Token<'a>>,
        ctx: &Context<'_>,
    ) -> Result<Vec<Token<'a>>, StageError> {
        if ctx.tables.contractions().is_empty() {
            return Ok(tokens);
        }

        let mut padded = Vec::with_capacity(tokens.len() + 2);
        padded.push(boundary());
        padded.extend(tokens);
        padded.push(boundary());

        for group in ctx.tables.contractions() {
            // Words and the single whitespace tokens between them.
            let span = 2 * group.words() - 1;
            let mut types = type_string(&padded);
            let mut pos = 0;

            while let Some(m) = group.matcher().find_at(&types, pos) {
                let start = m.start();
                let phrase = padded[start..start + span]
                    .iter()
                    .step_by(2)
                    .map(Token::lower)
                    .collect::<Vec<_>>()
                    .join(" ");

                if let Some(replacement) = group.get(&phrase) {
                    let case = padded[start].case().unwrap_or(LetterCase::Lower);
                    let value = recase(replacement, case).into_owned();
                    debug!(phrase = %phrase, replacement = %value, case = case.name(), "contraction");
                    padded.splice(start..start + span, once(Token::translated(value)));
                    types.replace_range(start..start + span, "t");
                }
                pos = start + 1;
            }
        }

        padded.pop();
        padded.remove(0);
        Ok(padded)
    }
}

impl StageTestConfig for Contract {
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ken ik jou", "kennik jou"),
            ("Ken ik", "Kennik"),
            ("MIJ HET", "MÈNNUT"),
            ("dat is het, toch", "dattis het, toch"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;
    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Contract);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hyphenate::DutchHyphenator,
        tables::Tables,
        token::{join_tokens, tokenize},
    };

    fn contract(text: &str) -> String {
        let ctx = Context::default();
        let tokens = Contract.apply(tokenize(text).collect(), &ctx).unwrap();
        join_tokens(&tokens)
    }

    #[test]
    fn folds_two_and_three_word_phrases() {
        assert_eq!(
            contract("Hallo, ken ik jou? Ik dacht het niet."),
            "Hallo, kennik jou? Ik dachutnie."
        );
        assert_eq!(contract("Ik houd van jou."), "Ik houd vajjâh.");
    }

    #[test]
    fn replacement_follows_first_word_case() {
        assert_eq!(contract("WAT KAN MIJ HET ROTTEN?"), "WAT KAN MÈNNUT ROTTEN?");
        assert_eq!(contract("Van jou"), "Vajjâh");
        assert_eq!(contract("van JOU"), "vajjâh");
    }

    #[test]
    fn phrase_must_end_at_a_boundary() {
        // `.` without whitespace after it does not close a candidate run
        assert_eq!(contract("van jou.x"), "van jou.x");
        assert_eq!(contract("van jou, toch"), "vajjâh, toch");
    }

    #[test]
    fn matches_do_not_cross_punctuation() {
        assert_eq!(contract("van, jou"), "van, jou");
    }

    #[test]
    fn folded_tokens_are_translated() {
        let ctx = Context::default();
        let tokens = Contract.apply(tokenize("ken ik").collect(), &ctx).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Translated);
        assert_eq!(tokens[0].value(), "kennik");
    }

    #[test]
    fn longest_phrase_wins() {
        let tables = Tables::builder()
            .contraction("dacht het", "dachut")
            .contraction("dacht het niet", "dachutnie")
            .build()
            .unwrap();
        let hyphenator = DutchHyphenator::default();
        let ctx = Context::new(&tables, &hyphenator);
        let tokens = Contract
            .apply(tokenize("ik dacht het niet").collect(), &ctx)
            .unwrap();
        assert_eq!(join_tokens(&tokens), "ik dachutnie");

        let tokens = Contract
            .apply(tokenize("ik dacht het wel").collect(), &ctx)
            .unwrap();
        assert_eq!(join_tokens(&tokens), "ik dachut wel");
    }

    #[test]
    fn adjacent_candidates_do_not_overlap() {
        let tables = Tables::builder()
            .contraction("a b", "x")
            .contraction("b c", "y")
            .build()
            .unwrap();
        let hyphenator = DutchHyphenator::default();
        let ctx = Context::new(&tables, &hyphenator);
        let tokens = Contract.apply(tokenize("a b c").collect(), &ctx).unwrap();
        assert_eq!(join_tokens(&tokens), "x c");

        let tokens = Contract.apply(tokenize("z b c").collect(), &ctx).unwrap();
        assert_eq!(join_tokens(&tokens), "z y");
    }

    #[test]
    fn many_hits_keep_positions_in_sync() {
        let input = format!("{}van jou, toch", "ken ik ".repeat(50));
        let expected = format!("{}vajjâh, toch", "kennik ".repeat(50));
        assert_eq!(contract(&input), expected);
    }

    #[test]
    fn no_tables_no_work() {
        let tables = Tables::builder().build().unwrap();
        let hyphenator = DutchHyphenator::default();
        let ctx = Context::new(&tables, &hyphenator);
        let tokens: Vec<_> = tokenize("ken ik").collect();
        assert!(!Contract.needs_apply(&tokens, &ctx).unwrap());
    }
}
