use crate::stage::Stage;

/// Trait that stages implement to opt into the shared test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hallo wereld 123", " 't is mooi ", "LEKKER", ""]
    }

    /// Samples that must come out unchanged, every token still borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hallo",   // no rule fires
            "wat kan", // no contraction, no rule
            "mp3",     // irregular word
            " , . ?",  // punctuation only
            "",        // empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the shared stage contracts.
///
/// ### Contracts
/// 1. `pass_through_is_borrowed` → untouched input keeps borrowed tokens
/// 2. `transforms_as_expected` → known inputs give known outputs
/// 3. `needs_apply_is_honest` → a `false` pre-check means `apply` changes nothing
/// 4. `handles_empty_input` → empty token vectors survive
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::pass_through_is_borrowed(&$stage);
        $crate::testing::stage_contract::transforms_as_expected(&$stage);
        $crate::testing::stage_contract::needs_apply_is_honest(&$stage);
        $crate::testing::stage_contract::handles_empty_input(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

#[cfg(test)]
use crate::{
    context::Context,
    token::{Token, join_tokens, tokenize},
};

#[cfg(test)]
fn run<'a, S: Stage>(stage: &S, text: &'a str, ctx: &Context<'_>) -> Vec<Token<'a>> {
    let tokens: Vec<_> = tokenize(text).collect();
    if stage.needs_apply(&tokens, ctx).unwrap() {
        stage.apply(tokens, ctx).unwrap()
    } else {
        tokens
    }
}

#[cfg(test)]
pub fn pass_through_is_borrowed<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &input in S::should_pass_through() {
        let tokens = run(stage, input, &ctx);
        assert_eq!(join_tokens(&tokens), input, "stage `{}` changed `{input}`", stage.name());
        assert!(
            tokens.iter().all(Token::is_borrowed),
            "stage `{}` allocated on pass-through sample `{input}`",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn transforms_as_expected<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &(input, expected) in S::should_transform() {
        let tokens = run(stage, input, &ctx);
        assert_eq!(
            join_tokens(&tokens),
            expected,
            "stage `{}` on `{input}`",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn needs_apply_is_honest<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let samples = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .copied()
        .chain(S::should_transform().iter().map(|(input, _)| *input));
    for input in samples {
        let tokens: Vec<_> = tokenize(input).collect();
        if stage.needs_apply(&tokens, &ctx).unwrap() {
            continue;
        }
        let output = stage.apply(tokens, &ctx).expect("apply errored");
        assert_eq!(
            join_tokens(&output),
            input,
            "needs_apply() of `{}` said no work for `{input}`, but apply() changed it",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn handles_empty_input<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let output = stage.apply(Vec::new(), &ctx).unwrap();
    assert!(output.is_empty());
    assert!(run(stage, "", &ctx).is_empty());
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let _ = stage.apply(
        tokenize("Hallo 世界 русский Türkçe العربية 简体中文 IJssel ĳs 'T").collect(),
        &ctx,
    );
}
