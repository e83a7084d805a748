//! Syllable-level phonetic rewrite engine.
//!
//! ```text
//! for each syllable, left to right:
//!     pair exception (this + next)   → literal, consumes 2
//!     syllable exception             → literal, consumes 1
//!     vowels     ─┐
//!     consonants  ├ rewrite a working copy of onset / nucleus / coda
//!     suffixes   ─┘
//!     two-syllable lookahead         → literal, consumes 2
//!     otherwise                      → onset + nucleus + coda, consumes 1
//! ```
//!
//! Within one family only the first matching rule fires. Vowel and consonant
//! conditions read the original syllable; suffix rules read the working copy,
//! after vowels and codas have settled.

use crate::{
    syllable::{Syllable, Syllables},
    tables::Tables,
};
use std::borrow::Cow;
use tracing::trace;

/// Prefixes that keep `-lijk` from reducing (`ge-lijk`, `te-ge-lijk`).
const PREFIXES: &[&str] = &["be", "er", "ge", "her", "on", "ont", "ver"];

/// Consonants a final `t` is dropped after (`dacht` → `dach`).
const T_DROP_AFTER: &[&str] = &["ch", "f", "k", "p", "s"];

/// Consonants that trigger an epenthetic vowel after `l`/`r` (`melk` → `mellek`).
const EPENTHESIS_BEFORE: &[&str] = &["ch", "f", "g", "k", "m", "p"];

/// Long vowels before a coda `r`, and what they become.
const R_LENGTHENING: &[(&str, &str)] = &[
    ("aa", "aah"),
    ("ee", "eâh"),
    ("eu", "euâh"),
    ("ie", "ieâh"),
    ("oe", "oeâh"),
    ("oo", "oâh"),
    ("uu", "uâh"),
];

/// Mutable working copy of one syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parts<'w> {
    pub onset: Cow<'w, str>,
    pub nucleus: Cow<'w, str>,
    pub coda: Cow<'w, str>,
}

impl<'w> Parts<'w> {
    pub fn of(syllable: &Syllable<'w>) -> Self {
        Self {
            onset: Cow::Borrowed(syllable.onset),
            nucleus: Cow::Borrowed(syllable.nucleus),
            coda: Cow::Borrowed(syllable.coda),
        }
    }

    pub fn render(&self) -> String {
        let mut out =
            String::with_capacity(self.onset.len() + self.nucleus.len() + self.coda.len());
        out.push_str(&self.onset);
        out.push_str(&self.nucleus);
        out.push_str(&self.coda);
        out
    }
}

/// A syllable with its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct Site<'s, 'w> {
    pub syllable: &'s Syllable<'w>,
    pub previous: Option<&'s Syllable<'w>>,
    pub next: Option<&'s Syllable<'w>>,
}

impl<'s, 'w> Site<'s, 'w> {
    pub fn at(syllables: &'s Syllables<'w>, index: usize) -> Option<Self> {
        Some(Self {
            syllable: syllables.get(index)?,
            previous: syllables.previous(index),
            next: syllables.next(index),
        })
    }
}

/// Output of one engine step and how many syllables it used up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub text: Cow<'a, str>,
    pub consumed: usize,
}

impl<'a> Step<'a> {
    fn one(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            consumed: 1,
        }
    }

    fn two(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            consumed: 2,
        }
    }
}

/// Rewrite a whole word, syllable by syllable.
pub fn rewrite_word(syllables: &Syllables<'_>, tables: &Tables) -> String {
    let mut out = String::with_capacity(syllables.word().len() + 4);
    let mut cursor = 0;
    while let Some(site) = Site::at(syllables, cursor) {
        let step = rewrite_step(site, tables);
        trace!(
            word = syllables.word(),
            syllable = site.syllable.value,
            out = %step.text,
            consumed = step.consumed,
            "syllable step"
        );
        out.push_str(&step.text);
        cursor += step.consumed;
    }
    out
}

/// Run the cascade for the syllable at `site`.
pub fn rewrite_step<'a>(site: Site<'_, 'a>, tables: &'a Tables) -> Step<'a> {
    let syllable = site.syllable;

    if let Some(next) = site.next
        && let Some(literal) = tables.syllable_pair(syllable.value, next.value)
    {
        return Step::two(literal);
    }
    if let Some(literal) = tables.syllable(syllable.value) {
        return Step::one(literal);
    }

    let mut parts = Parts::of(syllable);
    vowels(&site, &mut parts);
    consonants(&site, &mut parts);
    suffixes(&site, &mut parts);

    if let Some(literal) = lookahead(&site, &parts) {
        return Step::two(literal);
    }
    Step::one(parts.render())
}

/// Does `head` end in an unstressed prefix? An empty head counts as one.
fn ends_in_prefix(head: &str) -> bool {
    head.is_empty() || PREFIXES.iter().any(|p| head.ends_with(p))
}

fn vowels<'w>(site: &Site<'_, 'w>, parts: &mut Parts<'w>) {
    let s = site.syllable;
    let next = site.next;
    match s.nucleus {
        "ij" | "ei" => {
            if s.onset == "l" && s.coda == "k" && !ends_in_prefix(s.head) {
                // vreselijk → vreseluk
                parts.nucleus = Cow::Borrowed("u");
            } else if s.is_open()
                && next.is_some_and(|n| n.onset.is_empty() && n.nucleus.starts_with('e'))
            {
                // vrij-en → vrèj-en
                parts.nucleus = Cow::Borrowed("è");
                parts.coda = Cow::Borrowed("j");
            } else {
                parts.nucleus = Cow::Borrowed("è");
            }
        }
        "ui" => parts.nucleus = Cow::Borrowed("ùi"),
        "auw" | "ouw" => parts.nucleus = Cow::Borrowed("âh"),
        "au" | "ou" if s.is_open() && next.is_some_and(|n| n.onset.starts_with('w')) => {
            parts.nucleus = Cow::Borrowed("âh");
        }
        "ee" if s.is_initial() && s.coda.starts_with('n') && !s.is_final() => {
            parts.nucleus = Cow::Borrowed("u");
        }
        _ => {}
    }
}

fn is_short_vowel(nucleus: &str) -> bool {
    matches!(nucleus, "a" | "e" | "i" | "o" | "u")
}

fn consonants<'w>(site: &Site<'_, 'w>, parts: &mut Parts<'w>) {
    let s = site.syllable;

    // Final -t after a fricative or plosive is swallowed.
    if s.is_final()
        && let Some(before) = s.coda.strip_suffix('t')
        && T_DROP_AFTER.contains(&before)
    {
        parts.coda = Cow::Borrowed(before);
        return;
    }

    if let Some(rest) = s.coda.strip_prefix('r') {
        if let Some(&(_, long)) = R_LENGTHENING.iter().find(|(v, _)| *v == s.nucleus) {
            parts.nucleus = Cow::Borrowed(long);
            parts.coda = Cow::Borrowed(rest);
            return;
        }
        if s.nucleus == "e" && matches!(rest, "" | "s" | "d" | "t") {
            parts.nucleus = Cow::Borrowed("âh");
            parts.coda = Cow::Borrowed(rest);
            return;
        }
    }

    if is_short_vowel(s.nucleus)
        && let Some(liquid) = s.coda.chars().next().filter(|&c| c == 'l' || c == 'r')
    {
        let rest = &s.coda[1..];
        if EPENTHESIS_BEFORE.iter().any(|c| rest.starts_with(c)) {
            let vowel = if rest.starts_with('m') || rest.starts_with('p') {
                'u'
            } else {
                'e'
            };
            let mut coda = String::with_capacity(s.coda.len() + 2);
            coda.push(liquid);
            coda.push(liquid);
            coda.push(vowel);
            coda.push_str(rest);
            parts.coda = Cow::Owned(coda);
        }
    }
}

fn suffixes(site: &Site<'_, '_>, parts: &mut Parts<'_>) {
    let s = site.syllable;
    if s.is_initial() {
        return;
    }
    if parts.nucleus == "i" && parts.coda.starts_with('g') {
        // zuinig → zùinug
        parts.nucleus = Cow::Borrowed("u");
    } else if parts.nucleus == "i" && parts.coda == "sch" {
        // fantastisch → fantasties
        parts.nucleus = Cow::Borrowed("ie");
        parts.coda = Cow::Borrowed("s");
    } else if parts.nucleus == "e"
        && parts.coda == "n"
        && s.is_final()
        && site.previous.is_some_and(Syllable::is_open)
    {
        // dagen → dage
        parts.coda = Cow::Borrowed("");
    }
}

fn lookahead(site: &Site<'_, '_>, parts: &Parts<'_>) -> Option<String> {
    let s = site.syllable;
    let next = site.next?;
    if s.nucleus != "i" || !s.is_open() {
        return None;
    }
    if next.onset == "sch" {
        // lo-gi-sche → lo-giese
        return Some(format!("{}ies{}", parts.onset, next.rime()));
    }
    if next.onset.is_empty() && next.is_open() {
        // pi-a-no → pieja-no
        return Some(format!("{}iej{}", parts.onset, next.nucleus));
    }
    None
}
