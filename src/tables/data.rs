//! Built-in Haags tables.
//!
//! Keys are lowercase. Contraction keys are single-space-joined words, syllable
//! keys are either one syllable (`"tie"`) or two adjacent syllables joined
//! with a hyphen (`"lij-ke"`).

use phf::{Map, phf_map};

/// Fixed phrases folded into one dialect form.
pub static CONTRACTIONS: Map<&'static str, &'static str> = phf_map! {
    "ben je" => "bennie",
    "dacht het niet" => "dachutnie",
    "dat is" => "dattis",
    "doe maar" => "doemaah",
    "heb ik" => "hebbik",
    "heb je" => "hebbie",
    "het haags" => "'t haags",
    "is het" => "isset",
    "kan ik" => "kannik",
    "ken ik" => "kennik",
    "kom op" => "kommop",
    "mag ik" => "maggik",
    "mij het" => "mènnut",
    "van jou" => "vajjâh",
    "wat is" => "wattis",
    "weet ik veel" => "weetikveul",
    "zal ik" => "zallik",
    "zeg maar" => "zegmaah",
};

/// Words whose dialect form no syllable rule produces.
pub static WORDS: Map<&'static str, &'static str> = phf_map! {
    "alsjeblieft" => "assebleft",
    "centrum" => "sentrum",
    "eigenlijk" => "ègelluk",
    "een" => "un",
    "euro" => "pleuro",
    "het" => "ut",
    "meisje" => "mèssie",
    "natuurlijk" => "netuurluk",
    "niet" => "nie",
    "nou" => "nâh",
    "politie" => "pelisie",
    "scheveningen" => "scheveninge",
    "tram" => "trem",
};

/// Syllables (and syllable pairs) with a fixed dialect spelling.
pub static SYLLABLES: Map<&'static str, &'static str> = phf_map! {
    "cen" => "sen",
    "cent" => "sent",
    "ci" => "si",
    "lij-ke" => "luke",
    "lij-ker" => "lukâh",
    "ti-o" => "sio",
    "ti-on" => "sjon",
    "tie" => "sie",
};
