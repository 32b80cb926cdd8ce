//! Keyword frequency extraction and overuse detection.

use std::collections::HashMap;

use crate::locale::LocaleProfile;
use crate::types::Keyword;

/// Tokens shorter than this (in characters, after punctuation stripping)
/// are discarded.
const MIN_TOKEN_CHARS: usize = 4;

/// Frequency table over the filtered tokens of one text, kept in
/// first-occurrence order so ranking ties stay stable.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    entries: Vec<(String, usize)>,
    total: usize,
}

impl WordFrequencies {
    /// Number of qualifying tokens, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tokenize, lowercase, strip punctuation, drop short tokens and the
/// locale's stop words, then count.
pub fn frequencies(text: &str, locale: &LocaleProfile) -> WordFrequencies {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut total = 0usize;

    for token in text.split_whitespace() {
        let cleaned: String = token
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();
        if cleaned.chars().count() < MIN_TOKEN_CHARS || locale.is_stop_word(&cleaned) {
            continue;
        }
        total += 1;
        match seen.get(&cleaned) {
            Some(&index) => entries[index].1 += 1,
            None => {
                seen.insert(cleaned.clone(), entries.len());
                entries.push((cleaned, 1));
            }
        }
    }

    WordFrequencies { entries, total }
}

/// The `n` most frequent words, highest first. The sort is stable, so equal
/// frequencies keep their first-occurrence order.
pub fn top(freq: &WordFrequencies, n: usize) -> Vec<Keyword> {
    if freq.total == 0 {
        return Vec::new();
    }
    let total = freq.total as f64;
    let mut ranked: Vec<&(String, usize)> = freq.entries.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, count)| Keyword {
            word: word.clone(),
            count: *count,
            density: *count as f64 / total,
        })
        .collect()
}

/// Words whose density strictly exceeds `threshold`, evaluated over the full
/// filtered token set rather than the displayed top-N.
pub fn overused(freq: &WordFrequencies, threshold: f64) -> Vec<String> {
    if freq.total == 0 {
        return Vec::new();
    }
    let total = freq.total as f64;
    freq.entries
        .iter()
        .filter(|(_, count)| *count as f64 / total > threshold)
        .map(|(word, _)| word.clone())
        .collect()
}
