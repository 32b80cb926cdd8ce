//! Structural text statistics: word, sentence, paragraph and block counts.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

static MD_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#{1,6}\s+\S").unwrap());

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^*\n]+\*\*").unwrap());

static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(?:[-*•]\s+|\d+[.)]\s+)").unwrap());

/// A word is complex when its alphabetic core is longer than this.
const COMPLEX_WORD_CHARS: usize = 6;

/// Counts and ratios computed over one raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStructure {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub heading_count: usize,
    pub bold_count: usize,
    pub list_item_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub complex_word_ratio: f64,
}

/// Pure function over raw text. Sentences are runs between `.`/`!`/`?`,
/// paragraphs are blank-line separated blocks, words are whitespace tokens.
pub fn analyze(text: &str) -> TextStructure {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let sentence_count = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let paragraph_count = PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    let heading_count = text.lines().filter(|l| is_heading_line(l)).count();
    let bold_count = BOLD_RE.find_iter(text).count();
    let list_item_count = text.lines().filter(|l| LIST_ITEM_RE.is_match(l)).count();

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let complex_words = words
        .iter()
        .filter(|w| alphabetic_len(w) > COMPLEX_WORD_CHARS)
        .count();

    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let avg_word_length = if word_count > 0 {
        total_chars as f64 / word_count as f64
    } else {
        0.0
    };
    let complex_word_ratio = if word_count > 0 {
        complex_words as f64 / word_count as f64
    } else {
        0.0
    };

    TextStructure {
        word_count,
        sentence_count,
        paragraph_count,
        heading_count,
        bold_count,
        list_item_count,
        avg_sentence_length,
        avg_word_length,
        complex_word_ratio,
    }
}

/// Generated text marks headings inconsistently: sometimes markdown hashes,
/// sometimes just a short capitalized line. Both count; list items never do.
fn is_heading_line(line: &str) -> bool {
    if MD_HEADING_RE.is_match(line) {
        return true;
    }
    if LIST_ITEM_RE.is_match(line) {
        return false;
    }
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    first.is_uppercase()
        && trimmed.split_whitespace().count() <= 8
        && !trimmed.ends_with(['.', '!', '?', ':', ';', ','])
}

fn alphabetic_len(word: &str) -> usize {
    word.chars().filter(|c| c.is_alphabetic()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Вступление\n\nПервое предложение здесь. Второе предложение тоже! Третье?\n\n- пункт первый\n- пункт второй\n\nЗаключение **важно** сказано.";

    #[test]
    fn counts_blocks_and_words() {
        let s = analyze(SAMPLE);
        assert_eq!(s.word_count, 18);
        assert_eq!(s.sentence_count, 4);
        assert_eq!(s.paragraph_count, 4);
        assert_eq!(s.heading_count, 1);
        assert_eq!(s.bold_count, 1);
        assert_eq!(s.list_item_count, 2);
        assert!((s.avg_sentence_length - 4.5).abs() < 1e-9);
        assert!(s.avg_word_length > 0.0);
    }

    #[test]
    fn capitalized_standalone_line_counts_as_heading() {
        let s = analyze("Выбор жилета\n\nТекст абзаца идет тут.");
        assert_eq!(s.heading_count, 1);
        assert_eq!(s.paragraph_count, 2);
    }

    #[test]
    fn list_items_are_not_headings() {
        let s = analyze("- Пункт без точки\n- Второй пункт");
        assert_eq!(s.heading_count, 0);
        assert_eq!(s.list_item_count, 2);
    }

    #[test]
    fn empty_text_yields_zeroes() {
        let s = analyze("");
        assert_eq!(s, TextStructure::default());
    }

    #[test]
    fn complex_words_need_seven_alphabetic_chars() {
        // "машина." has six letters plus punctuation, so it stays simple.
        let s = analyze("машина. предложение.");
        assert!((s.complex_word_ratio - 0.5).abs() < 1e-9);
    }
}
