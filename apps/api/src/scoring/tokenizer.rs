//! Text normalisation: lower-cased word tokens and adjacent-word phrases.
//!
//! No stemming. Downstream matching is exact substring or set membership on
//! the lower-cased text.

use indexmap::IndexSet;

use crate::scoring::lexicon::is_stop_word;

/// Single-word tokens must be longer than this.
pub const MIN_KEYWORD_LEN: usize = 3;
/// Both halves of a phrase must be longer than this.
pub const MIN_PHRASE_WORD_LEN: usize = 2;

/// Significant single-word tokens in first-seen order.
///
/// Tokens are maximal runs of alphabetic characters, so digits and punctuation
/// split words and never appear inside one ("python3" yields "python").
pub fn keyword_tokens(text: &str) -> IndexSet<String> {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN)
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Every maximal alphabetic run with its byte offset. No length or stop-word filter.
pub fn alphabetic_words(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push((s, &text[s..i]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push((s, &text[s..]));
    }
    words
}

/// Adjacent word pairs in whitespace-split order.
///
/// Words keep their punctuation, and a pair survives only when both words are
/// longer than [`MIN_PHRASE_WORD_LEN`]. Repeated pairs are kept.
pub fn phrase_candidates(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    words
        .windows(2)
        .filter(|pair| pair.iter().all(|w| w.chars().count() > MIN_PHRASE_WORD_LEN))
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}
