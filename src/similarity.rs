//! The four pairwise similarity measures and the blended plagiarism verdict.
//!
//! Four orthogonal signals are combined because each alone is fooled by a
//! different rewrite: synonym swaps defeat exact n-grams but not cosine,
//! reordering defeats the character ratio but not Jaccard. The blend weights
//! are a fixed, auditable contract and must not be retuned.

use crate::models::{AnalysisParams, Severity, SimilarityReport};
use crate::tokenize::{ngrams, token_counts, tokenize};
use std::collections::{HashMap, HashSet};

/// Fixed blend weights for the overall similarity score. Sum to 1.0.
pub const COSINE_WEIGHT: f64 = 0.3;
pub const JACCARD_WEIGHT: f64 = 0.2;
pub const SEQUENCE_WEIGHT: f64 = 0.3;
pub const NGRAM_WEIGHT: f64 = 0.2;

/// Overall similarity percentage above which a text counts as plagiarized.
pub const PLAGIARISM_THRESHOLD: f64 = 50.0;

/// Cosine similarity between the term-frequency vectors of two texts.
///
/// Vectors span the union vocabulary of both texts with raw counts per
/// dimension. Returns 0.0 when either text has no tokens (zero magnitude).
pub fn cosine_similarity(text_a: &str, text_b: &str) -> f64 {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    let counts_a = token_counts(&tokens_a);
    let counts_b = token_counts(&tokens_b);

    // Only shared vocabulary contributes to the dot product.
    let dot: u64 = counts_a
        .iter()
        .filter_map(|(token, &ca)| counts_b.get(token).map(|&cb| ca * cb))
        .sum();

    let mag_a: u64 = counts_a.values().map(|&c| c * c).sum();
    let mag_b: u64 = counts_b.values().map(|&c| c * c).sum();

    if mag_a == 0 || mag_b == 0 {
        return 0.0;
    }

    dot as f64 / ((mag_a as f64).sqrt() * (mag_b as f64).sqrt())
}

/// Jaccard similarity between the token sets of two texts.
///
/// Returns 0.0 when the union is empty (both texts have no tokens).
pub fn jaccard_similarity(text_a: &str, text_b: &str) -> f64 {
    let set_a: HashSet<String> = tokenize(text_a).into_iter().collect();
    let set_b: HashSet<String> = tokenize(text_b).into_iter().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Character-level matching-blocks ratio between two raw strings.
///
/// Ratcliff/Obershelp: recursively find the longest contiguous matching
/// block, then match the pieces to its left and right. The ratio is
/// `2 * matched_chars / (len_a + len_b)`. Case- and whitespace-sensitive;
/// operates on chars of the raw text, not tokens. Returns 0.0 when both
/// strings are empty.
pub fn sequence_similarity(text_a: &str, text_b: &str) -> f64 {
    let a: Vec<char> = text_a.chars().collect();
    let b: Vec<char> = text_b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }

    // Index of positions in b for each char, for the longest-match scan.
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b_positions.entry(c).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut queue: Vec<(usize, usize, usize, usize)> = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_matching_block(&a, &b_positions, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            queue.push((alo, i, blo, j));
            queue.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Find the longest contiguous matching block of `a[alo..ahi]` within
/// `b[blo..bhi]`, given the position index of b's chars.
///
/// Returns (start_in_a, start_in_b, length); length 0 when nothing matches.
fn longest_matching_block(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0usize;

    // run_lengths[j] = length of the match ending at a[i], b[j]
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut new_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = if j > 0 {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_runs.insert(j, len);
                if len > best_size {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_size = len;
                }
            }
        }
        run_lengths = new_runs;
    }

    (best_i, best_j, best_size)
}

/// N-gram overlap of the submitted text against the reference text.
///
/// Asymmetric: the denominator is the reference's n-gram count, so the score
/// reads as "what fraction of the reference's phrases reappear". Returns 0.0
/// when the reference yields no n-grams (fewer than `n` tokens).
pub fn ngram_similarity(reference: &str, submitted: &str, n: usize) -> f64 {
    let grams_ref = ngrams(&tokenize(reference), n);
    let grams_sub = ngrams(&tokenize(submitted), n);

    if grams_ref.is_empty() {
        return 0.0;
    }

    let overlap = grams_ref.intersection(&grams_sub).count();
    overlap as f64 / grams_ref.len() as f64
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute all four similarity measures and the blended plagiarism verdict.
///
/// `reference` is the original/source text, `submitted` the text under test.
/// Never errors: empty inputs degrade to 0.0 component scores.
pub fn detect_plagiarism(
    reference: &str,
    submitted: &str,
    params: &AnalysisParams,
) -> SimilarityReport {
    let cosine = cosine_similarity(reference, submitted);
    let jaccard = jaccard_similarity(reference, submitted);
    let sequence = sequence_similarity(reference, submitted);
    let ngram = ngram_similarity(reference, submitted, params.ngram_size);

    let overall = (cosine * COSINE_WEIGHT
        + jaccard * JACCARD_WEIGHT
        + sequence * SEQUENCE_WEIGHT
        + ngram * NGRAM_WEIGHT)
        * 100.0;

    // Verdict fields come from the unrounded blend; stored scores are rounded.
    SimilarityReport {
        overall_similarity: round2(overall),
        cosine_similarity: round2(cosine * 100.0),
        jaccard_similarity: round2(jaccard * 100.0),
        sequence_similarity: round2(sequence * 100.0),
        ngram_similarity: round2(ngram * 100.0),
        is_plagiarized: overall > PLAGIARISM_THRESHOLD,
        severity: Severity::from_score(overall),
    }
}
