#[cfg(test)]
mod integration_tests {

    use crate::{
        Context, Haags, HaagsError, Hyphenate, Stage, StageError, Tables, Token, TokenKind,
        hyphenate::Offsets, translate,
    };

    #[test]
    fn multi_line_text() {
        let input = "
        Hallo, ken ik jou? Ik dacht het niet.
        WAT KAN MIJ HET ROTTEN? Ik houd van jou.
    ";
        let expected = "
        Hallo, kennik jou? Ik dachutnie.
        WAT KAN MÈNNUT ROTTEN? Ik houd vajjâh.
    ";
        assert_eq!(translate(input), expected);
    }

    #[test]
    fn words_and_contractions_together() {
        assert_eq!(
            translate("Is het niet lekker in Scheveningen?"),
            "Isset nie lekkâh in Scheveninge?"
        );
        assert_eq!(translate("Het Haags is mooi."), "'t haags is mooi.");
    }

    #[test]
    fn passthrough_tokens_survive() {
        let input = "Zie http://example.nl/pagina.html of mail@example.nl 😀 #3d";
        let out = translate(input);
        assert!(out.contains("http://example.nl/pagina.html"));
        assert!(out.contains("mail@example.nl"));
        assert!(out.ends_with("😀 #3d"));
    }

    /// Turns every full stop into `!`.
    struct Shout;

    impl Stage for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn needs_apply(&self, tokens: &[Token<'_>], _ctx: &Context<'_>) -> Result<bool, StageError> {
            Ok(tokens.iter().any(|t| t.value() == "."))
        }

        fn apply<'a>(
            &self,
            tokens: Vec<Token<'a>>,
            _ctx: &Context<'_>,
        ) -> Result<Vec<Token<'a>>, StageError> {
            Ok(tokens
                .into_iter()
                .map(|t| {
                    if t.value() == "." {
                        Token::new("!", TokenKind::Punctuation)
                    } else {
                        t
                    }
                })
                .collect())
        }
    }

    #[test]
    fn extra_stages_run_after_builtin() {
        let haags = Haags::builder().add_stage(Shout).build().unwrap();
        assert_eq!(haags.translate("Ik dacht het niet.").unwrap(), "Ik dachutnie!");
        let names: Vec<_> = haags.pipeline().stage_names().collect();
        assert_eq!(names, vec!["contract", "transliterate", "shout"]);
    }

    /// Every word is one syllable.
    struct Whole;

    impl Hyphenate for Whole {
        fn hyphenate(&self, _word: &str) -> Offsets {
            Offsets::new()
        }
    }

    /// Always reports a split past the end of the word.
    struct Overshoot;

    impl Hyphenate for Overshoot {
        fn hyphenate(&self, word: &str) -> Offsets {
            Offsets::from_slice(&[word.chars().count() + 1])
        }
    }

    #[test]
    fn custom_hyphenator_changes_syllables() {
        let haags = Haags::builder().hyphenator(Whole).build().unwrap();
        // `dagen` as one syllable: no open syllable before `-en`
        assert_eq!(haags.translate("dagen").unwrap(), "dagen");
        assert_eq!(Haags::default().translate("dagen").unwrap(), "dage");
    }

    #[test]
    fn backend_violation_policies() {
        let lenient = Haags::builder().hyphenator(Overshoot).build().unwrap();
        assert_eq!(lenient.translate("Mijn huis").unwrap(), "Mèn hùis");

        let strict = Haags::builder().hyphenator(Overshoot).strict().build().unwrap();
        let err = strict.translate("Mijn huis").unwrap_err();
        assert!(matches!(err, HaagsError::Stage(StageError::Failed("transliterate", _))));
        assert!(err.to_string().contains("mijn"));
    }

    #[test]
    fn shared_across_threads() {
        let inputs = ["van jou", "ken ik", "lekker", "Mijn huis", "dagen"];
        let expected = ["vajjâh", "kennik", "lekkâh", "Mèn hùis", "dage"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| scope.spawn(move || translate(input)))
                .collect();
            for (handle, want) in handles.into_iter().zip(expected) {
                assert_eq!(handle.join().unwrap(), want);
            }
        });
    }

    #[test]
    fn tables_are_shared_not_copied() {
        let a = Haags::default();
        let b = Haags::default();
        assert!(std::ptr::eq(a.tables(), b.tables()));
        assert!(std::ptr::eq(a.tables(), &*Tables::builtin()));
    }
}
