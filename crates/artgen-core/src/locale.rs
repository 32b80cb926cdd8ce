//! Locale-specific analysis data: stop words, vowels and readability
//! coefficients for the supported languages.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Coefficients of a localized Flesch reading-ease formula.
#[derive(Debug, Clone, Copy)]
pub struct FleschCoefficients {
    pub base: f64,
    pub sentence_weight: f64,
    pub syllable_weight: f64,
}

/// Oborneva's adaptation of Flesch reading ease for Cyrillic text.
const OBORNEVA: FleschCoefficients = FleschCoefficients {
    base: 206.835,
    sentence_weight: 1.3,
    syllable_weight: 60.1,
};

/// Per-language analysis profile.
pub struct LocaleProfile {
    pub code: &'static str,
    pub stop_words: HashSet<&'static str>,
    pub vowels: &'static str,
    /// Standardized readability formula, when one exists for the language.
    pub flesch: Option<FleschCoefficients>,
}

impl LocaleProfile {
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Estimated syllable count of one token: vowel count, at least one for
    /// any token that contains letters. Tokens without letters count zero.
    pub fn syllables(&self, token: &str) -> usize {
        let mut letters = 0usize;
        let mut vowels = 0usize;
        for c in token.chars().flat_map(|c| c.to_lowercase()) {
            if c.is_alphabetic() {
                letters += 1;
                if self.vowels.contains(c) {
                    vowels += 1;
                }
            }
        }
        if letters == 0 { 0 } else { vowels.max(1) }
    }
}

static RU: Lazy<LocaleProfile> = Lazy::new(|| LocaleProfile {
    code: "ru",
    stop_words: [
        "и", "в", "на", "с", "по", "для", "не", "что", "это", "от", "до", "при", "к", "а", "но",
        "или", "как", "так", "его", "если", "чтобы", "также", "когда", "этого", "более", "менее",
        "может", "нужно", "очень", "будет", "есть", "было", "были", "только", "можно", "этом",
    ]
    .into_iter()
    .collect(),
    vowels: "аеёиоуыэюя",
    flesch: Some(OBORNEVA),
});

static UK: Lazy<LocaleProfile> = Lazy::new(|| LocaleProfile {
    code: "uk",
    stop_words: [
        "і", "в", "на", "з", "по", "для", "не", "що", "це", "від", "до", "при", "та", "а", "але",
        "або", "як", "так", "його", "якщо", "щоби", "також", "коли", "цього", "більше", "менше",
        "може", "потрібно", "дуже", "буде", "бути", "було", "були", "лише", "можна", "цьому",
    ]
    .into_iter()
    .collect(),
    vowels: "аеєиіїоуюя",
    flesch: Some(OBORNEVA),
});

/// Lookup table injected into the quality checker, keyed by language code.
pub type LocaleTable = HashMap<&'static str, &'static LocaleProfile>;

/// The built-in locales. `ua` is accepted as an alias for Ukrainian because
/// the topic catalog historically used it.
pub fn default_locales() -> LocaleTable {
    HashMap::from([
        ("ru", &*RU),
        ("uk", &*UK),
        ("ua", &*UK),
    ])
}

/// Fallback for unrecognized language codes.
pub fn primary() -> &'static LocaleProfile {
    &RU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_differ_per_locale() {
        let locales = default_locales();
        let ru = locales["ru"];
        let uk = locales["uk"];
        assert!(ru.is_stop_word("чтобы"));
        assert!(!ru.is_stop_word("якщо"));
        assert!(uk.is_stop_word("якщо"));
        assert!(!uk.is_stop_word("чтобы"));
    }

    #[test]
    fn ua_aliases_ukrainian() {
        let locales = default_locales();
        assert_eq!(locales["ua"].code, "uk");
    }

    #[test]
    fn syllable_estimate_counts_vowels() {
        assert_eq!(primary().syllables("машина"), 3);
        assert_eq!(primary().syllables("вздрогнуть"), 2);
        // Consonant-only tokens still carry one syllable.
        assert_eq!(primary().syllables("вскр"), 1);
        // Tokens without letters carry none.
        assert_eq!(primary().syllables("##"), 0);
        assert_eq!(primary().syllables("123"), 0);
    }
}
