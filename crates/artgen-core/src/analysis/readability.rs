//! Readability scoring on a fixed 0-10 scale, higher reads easier.
//!
//! Three custom heuristics (sentence length, word length, lexical
//! complexity) are blended with a localized Flesch reading-ease formula when
//! the locale provides one; otherwise the heuristics are renormalized to
//! carry the full weight. All components are monotonically decreasing in
//! their complexity input and clamped, so the result is always a finite
//! value in `[MIN_SCORE, MAX_SCORE]`.

use crate::locale::LocaleProfile;

use super::structure::TextStructure;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

const FLESCH_WEIGHT: f64 = 0.4;
const SENTENCE_WEIGHT: f64 = 0.3;
const WORD_WEIGHT: f64 = 0.2;
const COMPLEXITY_WEIGHT: f64 = 0.1;

/// Texts with real sentence structure read easier than fragments; anything
/// past this many sentences earns a flat bonus.
const BONUS_SENTENCE_COUNT: usize = 5;
const STRUCTURE_BONUS: f64 = 2.0;

/// Score one text. Zero sentences or zero words short-circuit to the
/// minimum score; no input can produce a NaN or a panic.
pub fn score(text: &str, structure: &TextStructure, locale: &LocaleProfile) -> f64 {
    if structure.sentence_count == 0 || structure.word_count == 0 {
        return MIN_SCORE;
    }

    let sentence_score = clamp(10.0 - structure.avg_sentence_length / 5.0);
    let word_score = clamp(10.0 - structure.avg_word_length);
    let complexity_score = clamp(10.0 - structure.complex_word_ratio * 30.0);

    let blended = match locale.flesch {
        Some(coeffs) => {
            let flesch = coeffs.base
                - coeffs.sentence_weight * structure.avg_sentence_length
                - coeffs.syllable_weight * syllables_per_word(text, locale);
            let flesch_norm = clamp(flesch / 10.0);
            FLESCH_WEIGHT * flesch_norm
                + SENTENCE_WEIGHT * sentence_score
                + WORD_WEIGHT * word_score
                + COMPLEXITY_WEIGHT * complexity_score
        }
        None => {
            (SENTENCE_WEIGHT * sentence_score
                + WORD_WEIGHT * word_score
                + COMPLEXITY_WEIGHT * complexity_score)
                / (SENTENCE_WEIGHT + WORD_WEIGHT + COMPLEXITY_WEIGHT)
        }
    };

    let bonus = if structure.sentence_count > BONUS_SENTENCE_COUNT {
        STRUCTURE_BONUS
    } else {
        0.0
    };

    let total = blended + bonus;
    if total.is_finite() { clamp(total) } else { MIN_SCORE }
}

fn syllables_per_word(text: &str, locale: &LocaleProfile) -> f64 {
    let mut words = 0usize;
    let mut syllables = 0usize;
    for token in text.split_whitespace() {
        let count = locale.syllables(token);
        if count > 0 {
            words += 1;
            syllables += count;
        }
    }
    if words == 0 {
        0.0
    } else {
        syllables as f64 / words as f64
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::structure;
    use crate::locale;

    #[test]
    fn empty_text_scores_zero() {
        let s = structure::analyze("");
        assert_eq!(score("", &s, locale::primary()), 0.0);
    }

    #[test]
    fn punctuation_only_scores_zero() {
        let text = "... !!! ???";
        let s = structure::analyze(text);
        assert_eq!(score(text, &s, locale::primary()), 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        for text in [
            "Короткая фраза.",
            "слово",
            "Очень длинное перечисление несовместимых прилагательных продолжается бесконечно безостановочно.",
        ] {
            let s = structure::analyze(text);
            let value = score(text, &s, locale::primary());
            assert!((MIN_SCORE..=MAX_SCORE).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn longer_sentences_score_lower() {
        let short = "Это дело. Это цена. Это игра. Это сила. Это шанс. Это вкус. Это мода.";
        let long = "Это дело и цена и игра и сила и шанс и вкус и мода и снова дело и снова цена и снова игра и снова сила.";
        let short_structure = structure::analyze(short);
        let long_structure = structure::analyze(long);
        assert!(
            score(short, &short_structure, locale::primary())
                > score(long, &long_structure, locale::primary())
        );
    }
}
