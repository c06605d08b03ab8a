//! Word, sentence, and n-gram extraction from raw text.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));
static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Extract lower-cased word tokens in document order.
///
/// A token is a maximal run of word characters (Unicode letters, digits,
/// underscore). Duplicates are retained; empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Each piece is trimmed; pieces that trim to empty are dropped. Order is
/// preserved.
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate the set of unique n-grams from a token sequence.
///
/// An n-gram is an ordered tuple of exactly `n` consecutive tokens. Returns
/// an empty set when the sequence has fewer than `n` tokens or `n` is 0.
pub fn ngrams(tokens: &[String], n: usize) -> HashSet<Vec<String>> {
    if tokens.len() < n || n == 0 {
        return HashSet::new();
    }

    tokens.windows(n).map(|w| w.to_vec()).collect()
}

/// Count token occurrences (term frequencies) for a token sequence.
pub fn token_counts(tokens: &[String]) -> HashMap<&str, u64> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_default() += 1;
    }
    counts
}
